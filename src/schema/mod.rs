use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub is_key: bool,
}

#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_key: false,
        }
    }

    pub fn key(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_key: true,
        }
    }
}

impl TableSchema {
    pub fn new(name: &str, columns: Vec<Column>) -> Self {
        Self {
            name: name.to_string(),
            columns,
        }
    }

    /// Labels of the columns to draw, in schema order. With `show_keys` only
    /// key columns are listed.
    pub fn labels(&self, show_keys: bool) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !show_keys || c.is_key)
            .map(|c| c.name.clone())
            .collect()
    }
}

// A table that resolves with zero columns counts as missing.
pub trait SchemaSource {
    fn table(&self, database: &str, table: &str) -> Option<TableSchema>;
}

#[derive(Debug, Default)]
pub struct InMemorySchema {
    databases: HashMap<String, HashMap<String, TableSchema>>,
}

impl InMemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, database: &str, schema: TableSchema) -> &mut Self {
        self.databases
            .entry(database.to_string())
            .or_default()
            .insert(schema.name.clone(), schema);
        self
    }
}

impl SchemaSource for InMemorySchema {
    fn table(&self, database: &str, table: &str) -> Option<TableSchema> {
        self.databases.get(database)?.get(table).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> TableSchema {
        TableSchema::new("orders", vec![
            Column::key("id"),
            Column::new("customer"),
            Column::key("order_no"),
            Column::new("total"),
        ])
    }

    #[test]
    fn should_list_all_columns_in_order() {
        assert_eq!(orders().labels(false), vec!["id", "customer", "order_no", "total"]);
    }

    #[test]
    fn should_list_only_keys_when_show_keys() {
        assert_eq!(orders().labels(true), vec!["id", "order_no"]);
    }

    #[test]
    fn should_resolve_table_per_database() {
        let mut source = InMemorySchema::new();
        source.add_table("shop", orders());

        assert!(source.table("shop", "orders").is_some());
        assert!(source.table("shop", "customers").is_none());
        assert!(source.table("other", "orders").is_none());
    }
}
