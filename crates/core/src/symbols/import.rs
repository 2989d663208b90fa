//! Reference-data normalization pipeline.
//!
//! Exchange master lists ship with wildly inconsistent column headers. This
//! module maps the known spellings onto canonical fields, projects each row
//! into a [`NewSymbol`], and reports per-field diagnostics so a bad export
//! is visible without failing the run.

use csv::ReaderBuilder;

use super::symbols_model::NewSymbol;
use crate::errors::{ImportError, Result};

/// Canonical field a recognized header maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Symbol,
    Name,
    Isin,
    Series,
    Industry,
}

/// Maps a raw header (case-insensitive, trimmed) to its canonical field.
/// Unrecognized headers are ignored, not an error.
fn map_header(raw: &str) -> Option<Field> {
    match raw.trim().to_lowercase().as_str() {
        // symbol variations
        "symbol" | "scrip" | "scrip code" | "tradingsymbol" | "sc_code" => Some(Field::Symbol),
        // name variations
        "name of company" | "security name" | "company name" | "issuer name" | "company" => {
            Some(Field::Name)
        }
        // isin variations
        "isin number" | "isin" | "isin code" => Some(Field::Isin),
        // optional extras
        "series" => Some(Field::Series),
        "industry" | "industry type" => Some(Field::Industry),
        _ => None,
    }
}

/// Projection of one raw row onto the recognized columns.
#[derive(Debug, Default)]
struct RawRow {
    symbol: Option<String>,
    name: Option<String>,
    isin: Option<String>,
    series: Option<String>,
}

impl RawRow {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Symbol => self.symbol = Some(value),
            Field::Name => self.name = Some(value),
            Field::Isin => self.isin = Some(value),
            Field::Series => self.series = Some(value),
            // Recognized so it is not flagged as noise, but the catalog
            // does not carry it.
            Field::Industry => {}
        }
    }

    fn identifiable(&self) -> bool {
        self.symbol.is_some() || self.name.is_some()
    }
}

/// Parsed reference file: canonical rows plus diagnostics.
#[derive(Debug)]
pub struct ParsedReference {
    pub records: Vec<NewSymbol>,
    /// Data rows read from the file, before filtering.
    pub total_rows: usize,
    /// Identifiable rows that still lack a symbol.
    pub missing_symbol: usize,
    /// Identifiable rows that still lack a name.
    pub missing_name: usize,
}

/// Reads the first (and only) sheet of a CSV export into canonical records.
///
/// Every captured value is stringified and trimmed; whitespace-only cells
/// are treated as absent. Rows with neither symbol nor name are dropped.
/// An empty sheet is an error — there is nothing to upsert and a silent
/// no-op run would look like success.
pub fn parse_reference_csv(content: &[u8]) -> Result<ParsedReference> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let header_fields: Vec<Option<Field>> = reader
        .headers()
        .map_err(|e| ImportError::InvalidFile(e.to_string()))?
        .iter()
        .map(map_header)
        .collect();

    let mut total_rows = 0usize;
    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::InvalidFile(e.to_string()))?;
        total_rows += 1;

        let mut row = RawRow::default();
        for (index, value) in record.iter().enumerate() {
            let Some(Some(field)) = header_fields.get(index).copied() else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            row.set(field, value.to_string());
        }
        if row.identifiable() {
            rows.push(row);
        }
    }

    if total_rows == 0 {
        return Err(ImportError::NoRows.into());
    }

    let missing_symbol = rows.iter().filter(|r| r.symbol.is_none()).count();
    let missing_name = rows.iter().filter(|r| r.name.is_none()).count();

    let records = rows
        .into_iter()
        .map(|row| NewSymbol {
            symbol: row.symbol.unwrap_or_default().to_uppercase(),
            name: row.name.unwrap_or_default(),
            isin: row.isin,
            exchange: row.series,
            instrument_type: None,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
        })
        .collect();

    Ok(ParsedReference {
        records,
        total_rows,
        missing_symbol,
        missing_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use serde_json::json;

    #[test]
    fn maps_common_header_spellings() {
        assert_eq!(map_header("Symbol"), Some(Field::Symbol));
        assert_eq!(map_header("  SCRIP CODE "), Some(Field::Symbol));
        assert_eq!(map_header("Company Name"), Some(Field::Name));
        assert_eq!(map_header("NAME OF COMPANY"), Some(Field::Name));
        assert_eq!(map_header("ISIN Number"), Some(Field::Isin));
        assert_eq!(map_header("Series"), Some(Field::Series));
        assert_eq!(map_header("Face Value"), None);
    }

    #[test]
    fn projects_row_into_canonical_record() {
        let csv = "Symbol,Company Name\nTCS,Tata Consultancy\n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 1);
        let record = &parsed.records[0];
        assert_eq!(record.symbol, "TCS");
        assert_eq!(record.name, "Tata Consultancy");
        assert_eq!(record.isin, None);
        assert_eq!(record.exchange, None);
        assert_eq!(record.metadata, json!({}));
        assert_eq!(parsed.missing_symbol, 0);
        assert_eq!(parsed.missing_name, 0);
    }

    #[test]
    fn uppercases_symbol_and_keeps_series_as_exchange() {
        let csv = "SYMBOL,NAME OF COMPANY,SERIES,ISIN NUMBER\n\
                   reliance,Reliance Industries,EQ,INE002A01018\n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();

        let record = &parsed.records[0];
        assert_eq!(record.symbol, "RELIANCE");
        assert_eq!(record.exchange.as_deref(), Some("EQ"));
        assert_eq!(record.isin.as_deref(), Some("INE002A01018"));
    }

    #[test]
    fn unrecognized_headers_are_ignored() {
        let csv = "Symbol,Company Name,Face Value,Paid Up Value\nTCS,Tata,1,1\n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].name, "Tata");
    }

    #[test]
    fn whitespace_only_cells_are_absent() {
        let csv = "Symbol,Company Name,ISIN\nTCS,   ,  \n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].name, "");
        assert_eq!(parsed.records[0].isin, None);
        assert_eq!(parsed.missing_name, 1);
        assert_eq!(parsed.missing_symbol, 0);
    }

    #[test]
    fn drops_rows_with_neither_symbol_nor_name() {
        let csv = "Symbol,Company Name,Series\n,,EQ\nTCS,Tata,EQ\n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.total_rows, 2);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].symbol, "TCS");
    }

    #[test]
    fn counts_missing_fields_as_diagnostics_not_failures() {
        let csv = "Symbol,Company Name\nTCS,\n,Unnamed Industries\nINFY,Infosys\n";
        let parsed = parse_reference_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.missing_symbol, 1);
        assert_eq!(parsed.missing_name, 1);
    }

    #[test]
    fn empty_sheet_is_an_error() {
        let csv = "Symbol,Company Name\n";
        let err = parse_reference_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(ImportError::NoRows)));
    }
}
