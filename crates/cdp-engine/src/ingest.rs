//! CSV ingestion: raw text to validated [`ClientRecord`]s.
//!
//! Fatal errors are limited to a missing header/data row or missing
//! required columns. Malformed or incomplete rows are warned about and
//! skipped so one bad row never sinks the batch.

use cdp_core::csv::split_fields;
use cdp_core::{ClientRecord, RiskTier, SocialNetwork};

use crate::error::IngestError;

/// Required columns: canonical header name plus accepted aliases.
///
/// The canonical names are the upstream export's Spanish headers; the
/// English aliases let hand-built files through. Matching is
/// case-insensitive and order-independent.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("id_cliente", &["id"]),
    ("nombre", &["name"]),
    ("sector", &[]),
    ("gasto_promedio", &["spend"]),
    ("riesgo", &["risk"]),
    ("red_social", &["network"]),
];

/// Parse CSV text into client records.
///
/// Pure transform: the caller decides where the text came from.
///
/// # Errors
///
/// Returns [`IngestError::TooFewRows`] if there is no header or no data
/// row, and [`IngestError::MissingColumns`] naming every required column
/// that is absent from the header.
pub fn parse_clients(csv: &str) -> Result<Vec<ClientRecord>, IngestError> {
    let lines: Vec<&str> = csv.trim().lines().collect();
    if lines.len() < 2 {
        return Err(IngestError::TooFewRows);
    }

    let headers: Vec<String> = split_fields(lines[0])
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
    let mut missing = Vec::new();
    for (canonical, aliases) in REQUIRED_COLUMNS {
        let found = headers
            .iter()
            .position(|h| h == canonical || aliases.contains(&h.as_str()));
        match found {
            Some(idx) => indices.push(idx),
            None => missing.push((*canonical).to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }
    let &[id_idx, name_idx, sector_idx, spend_idx, risk_idx, network_idx] = &indices[..] else {
        unreachable!("one index per required column");
    };

    let mut clients = Vec::new();
    for (line_no, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line);
        if fields.len() < REQUIRED_COLUMNS.len() {
            tracing::warn!(
                row = line_no + 1,
                fields = fields.len(),
                "row has fewer columns than expected, skipping"
            );
            continue;
        }

        // Header may carry extra columns beyond the required six, so a
        // resolved index can point past the end of a short-but-accepted
        // row. Absent fields read as empty and take the usual defaults.
        let field = |idx: usize| fields.get(idx).map_or("", String::as_str);

        let id = field(id_idx).to_string();
        let name = field(name_idx).to_string();
        if id.is_empty() || name.is_empty() {
            tracing::warn!(row = line_no + 1, "row missing id or name, skipping");
            continue;
        }

        clients.push(ClientRecord {
            id,
            name,
            sector: field(sector_idx).to_lowercase(),
            avg_spend: field(spend_idx).parse().unwrap_or(0.0),
            risk: RiskTier::normalize(field(risk_idx)),
            network: SocialNetwork::normalize(field(network_idx)),
        });
    }

    Ok(clients)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id_cliente,nombre,sector,gasto_promedio,riesgo,red_social";

    #[test]
    fn parses_single_valid_row() {
        let csv = format!("{HEADER}\nC001,Ana,retail,100,bajo,instagram");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients.len(), 1);
        let c = &clients[0];
        assert_eq!(c.id, "C001");
        assert_eq!(c.name, "Ana");
        assert_eq!(c.sector, "retail");
        assert!((c.avg_spend - 100.0).abs() < f64::EPSILON);
        assert_eq!(c.risk, RiskTier::Low);
        assert_eq!(c.network, SocialNetwork::Instagram);
    }

    #[test]
    fn missing_columns_is_fatal() {
        let err = parse_clients("a,b\n1,2").unwrap_err();
        match err {
            IngestError::MissingColumns(cols) => {
                assert_eq!(cols.len(), 6);
                assert!(cols.contains(&"id_cliente".to_string()));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn partial_header_reports_only_absent_columns() {
        let err = parse_clients("id_cliente,nombre,sector\nC1,Ana,retail").unwrap_err();
        match err {
            IngestError::MissingColumns(cols) => {
                assert_eq!(
                    cols,
                    vec!["gasto_promedio", "riesgo", "red_social"]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_fatal() {
        assert!(matches!(
            parse_clients(HEADER).unwrap_err(),
            IngestError::TooFewRows
        ));
        assert!(matches!(parse_clients("").unwrap_err(), IngestError::TooFewRows));
    }

    #[test]
    fn header_matching_is_case_insensitive_and_order_free() {
        let csv = "RED_SOCIAL,Riesgo,GASTO_PROMEDIO,Sector,NOMBRE,Id_Cliente\n\
                   linkedin,alto,60000,finanzas,Beta Corp,C002";
        let clients = parse_clients(csv).unwrap();
        assert_eq!(clients[0].id, "C002");
        assert_eq!(clients[0].network, SocialNetwork::Linkedin);
        assert!((clients[0].avg_spend - 60000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn english_header_aliases_accepted() {
        let csv = "id,name,sector,spend,risk,network\nC003,Cora,energy,30000,low,twitter";
        let clients = parse_clients(csv).unwrap();
        assert_eq!(clients[0].name, "Cora");
        assert_eq!(clients[0].network, SocialNetwork::Twitter);
    }

    #[test]
    fn quoted_field_with_comma_survives() {
        let csv = format!("{HEADER}\nC004,\"Acme, Inc.\",technology,80000,low,linkedin");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients[0].name, "Acme, Inc.");
    }

    #[test]
    fn short_row_is_skipped_not_fatal() {
        let csv = format!("{HEADER}\nC005,Dana\nC006,Eli,retail,100,bajo,facebook");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "C006");
    }

    #[test]
    fn row_missing_id_or_name_is_skipped() {
        let csv = format!("{HEADER}\n,NoId,retail,100,bajo,instagram\nC007,,retail,100,bajo,instagram");
        let clients = parse_clients(&csv).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn blank_lines_skipped() {
        let csv = format!("{HEADER}\n\nC008,Fay,retail,100,medio,twitter\n\n");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[test]
    fn unparsable_spend_defaults_to_zero() {
        let csv = format!("{HEADER}\nC009,Gus,retail,lots,bajo,instagram");
        let clients = parse_clients(&csv).unwrap();
        assert!((clients[0].avg_spend - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_risk_and_network_take_defaults() {
        let csv = format!("{HEADER}\nC010,Hal,retail,100,extreme,myspace");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients[0].risk, RiskTier::Medium);
        assert_eq!(clients[0].network, SocialNetwork::Instagram);
    }

    #[test]
    fn extra_header_columns_are_ignored() {
        let csv = "notes,id_cliente,nombre,sector,gasto_promedio,riesgo,red_social\n\
                   vip,C012,Jo,finanzas,70000,bajo,linkedin";
        let clients = parse_clients(csv).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "C012");
        assert_eq!(clients[0].network, SocialNetwork::Linkedin);
        assert!((clients[0].avg_spend - 70000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_row_under_extra_column_header_defaults_trailing_fields() {
        // Six fields satisfy the minimum-width guard, but the resolved
        // red_social index points one past the row's end; the missing
        // field must read as empty and take the network default, not
        // panic.
        let csv = "extra,id_cliente,nombre,sector,gasto_promedio,riesgo,red_social\n\
                   x,C013,Kai,retail,100,bajo";
        let clients = parse_clients(csv).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "C013");
        assert_eq!(clients[0].risk, RiskTier::Low);
        assert_eq!(clients[0].network, SocialNetwork::Instagram);
    }

    #[test]
    fn sector_stored_lowercase() {
        let csv = format!("{HEADER}\nC011,Ines,TECHNOLOGY,100,bajo,instagram");
        let clients = parse_clients(&csv).unwrap();
        assert_eq!(clients[0].sector, "technology");
    }
}
