use crate::{descriptor, error::Error, traits::Record};

///
/// TableSchema
///
/// Parts of a derived table definition, before rendering.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: Vec<&'static str>,
    pub references: Vec<&'static str>,
    pub indexes: Vec<&'static str>,
}

impl TableSchema {
    /// Collect column, reference and index clauses for `R`.
    pub fn derive<R: Record>() -> Result<Self, Error> {
        descriptor::ensure_flat::<R>()?;
        let columns = descriptor::column_definitions::<R>()?;

        let mut references = Vec::new();
        let mut indexes = Vec::new();
        for field in R::FIELDS {
            references.extend(field.reference);
            indexes.extend(field.index);
        }

        Ok(Self {
            table: R::TABLE,
            columns,
            references,
            indexes,
        })
    }

    /// Render `CREATE TABLE IF NOT EXISTS` followed by one statement per index.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", self.table);

        let body = self
            .columns
            .iter()
            .chain(self.references.iter())
            .map(|clause| format!("\t{clause}"))
            .collect::<Vec<_>>()
            .join(",\n");
        sql.push_str(&body);
        sql.push_str("\n);");

        for index in &self.indexes {
            sql.push_str(&format!("\n{index};"));
        }

        sql
    }
}

/// Derive the full creation script for `R`.
pub fn create_table_sql<R: Record>() -> Result<String, Error> {
    TableSchema::derive::<R>().map(|schema| schema.to_sql())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::test_fixtures::{Asset, Holder, Order, Price, Tagged, Unannotated};
    use proptest::prelude::*;

    #[test]
    fn asset_table() {
        assert_eq!(
            create_table_sql::<Asset>().unwrap(),
            "CREATE TABLE IF NOT EXISTS Asset (
\tid SERIAL PRIMARY KEY,
\tticker VARCHAR(16) NOT NULL,
\tsource VARCHAR(16) NOT NULL,
\tdecimals SMALLINT NOT NULL CHECK (decimals >= 0)
);"
        );
    }

    #[test]
    fn price_table_with_reference_and_index() {
        assert_eq!(
            create_table_sql::<Price>().unwrap(),
            "CREATE TABLE IF NOT EXISTS Price (
\tid SERIAL PRIMARY KEY,
\tasset_id INTEGER NOT NULL,
\tprice BIGINT NOT NULL,
\ttimestamp TIMESTAMP DEFAULT NOW() NOT NULL,
\tFOREIGN KEY (asset_id) REFERENCES asset(id)
);
CREATE INDEX idx_price_asset_id ON Price(asset_id);"
        );
    }

    #[test]
    fn multiple_references_and_indexes_keep_declaration_order() {
        assert_eq!(
            create_table_sql::<Order>().unwrap(),
            "CREATE TABLE IF NOT EXISTS Order (
\torder_detail_id SERIAL PRIMARY KEY,
\torder_id INTEGER NOT NULL,
\tproduct_id INTEGER NOT NULL,
\tquantity INTEGER NOT NULL CHECK (quantity > 0),
\tunit_price DECIMAL(10, 2) NOT NULL CHECK (unit_price > 0),
\tFOREIGN KEY (order_id) REFERENCES Assets(order_id),
\tFOREIGN KEY (quantity) REFERENCES Assets(asset_id)
);
CREATE INDEX idx_test_quantity ON Order(quantity);
CREATE INDEX idx_test_unit_price ON Order(unit_price);"
        );
    }

    #[test]
    fn generic_parameters_are_stripped_from_table_name() {
        let sql = create_table_sql::<Tagged<String>>().unwrap();

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS Tagged (\n"));
    }

    #[test]
    fn missing_definition_fails() {
        assert!(matches!(
            create_table_sql::<Unannotated>(),
            Err(Error::Shape(ShapeError::MissingColumn { .. }))
        ));
    }

    #[test]
    fn nested_record_field_fails() {
        assert!(matches!(
            create_table_sql::<Holder>(),
            Err(Error::Shape(ShapeError::NestedRecord {
                table: "Holder",
                field: "asset",
                nested: "Asset"
            }))
        ));
    }

    proptest! {
        #[test]
        fn one_line_per_column_then_references_then_indexes(
            columns in prop::collection::vec("[a-z]{1,8} INTEGER", 1..8),
            references in prop::collection::vec("FOREIGN KEY \\([a-z]{1,8}\\) REFERENCES t\\(id\\)", 0..4),
            indexes in prop::collection::vec("CREATE INDEX idx_[a-z]{1,8} ON t\\(id\\)", 0..4),
        ) {
            let schema = TableSchema {
                table: "t",
                columns: columns.iter().map(|c| &*c.clone().leak()).collect(),
                references: references.iter().map(|r| &*r.clone().leak()).collect(),
                indexes: indexes.iter().map(|i| &*i.clone().leak()).collect(),
            };
            let sql = schema.to_sql();
            let lines = sql.lines().collect::<Vec<_>>();

            // header, columns, references, terminator, indexes
            prop_assert_eq!(lines.len(), 2 + columns.len() + references.len() + indexes.len());
            prop_assert_eq!(lines[0], "CREATE TABLE IF NOT EXISTS t (");

            let body = &lines[1..=columns.len() + references.len()];
            for (line, column) in body.iter().zip(&columns) {
                let want = format!("\t{column}");
                prop_assert!(line.starts_with(&want));
            }
            for (line, reference) in body[columns.len()..].iter().zip(&references) {
                let want = format!("\t{reference}");
                prop_assert!(line.starts_with(&want));
            }

            // only the final body line is unterminated
            let (last, rest) = body.split_last().unwrap();
            prop_assert!(!last.ends_with(','));
            prop_assert!(rest.iter().all(|line| line.ends_with(',')));

            let terminator = 1 + columns.len() + references.len();
            prop_assert_eq!(lines[terminator], ");");
            for (line, index) in lines[terminator + 1..].iter().zip(&indexes) {
                prop_assert_eq!(*line, format!("{index};"));
            }
        }
    }
}
