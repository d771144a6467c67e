use cellwatch_core::{Column, ColumnType};

/// Number of repeated daily measurement groups in one event record.
pub const DAY_GROUPS: usize = 14;

const GROUP_FIELDS: [&str; 6] = [
    "total_voltage",
    "total_current",
    "cell_max_voltage",
    "cell_min_voltage",
    "max_temperature",
    "min_temperature",
];

/// Column list for one prediction event record, in the order the handler
/// code writes fields: identity and prediction first, then the daily
/// measurement groups newest-first (14 down to 1). The catalog table
/// declares exactly this list; tests keep the two from drifting.
pub fn event_record_columns() -> Vec<Column> {
    let mut columns = vec![
        Column::new("request_id", ColumnType::String),
        Column::new("vin", ColumnType::String),
        Column::new("date", ColumnType::Date),
        Column::new("predicted_prob", ColumnType::Float),
    ];

    for day in (1..=DAY_GROUPS).rev() {
        for field in GROUP_FIELDS {
            columns.push(Column::new(&format!("{field}_{day}"), ColumnType::Float));
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record_has_88_columns() {
        assert_eq!(event_record_columns().len(), 4 + DAY_GROUPS * 6);
        assert_eq!(event_record_columns().len(), 88);
    }

    #[test]
    fn test_event_record_header_columns() {
        let columns = event_record_columns();

        assert_eq!(columns[0], Column::new("request_id", ColumnType::String));
        assert_eq!(columns[1], Column::new("vin", ColumnType::String));
        assert_eq!(columns[2], Column::new("date", ColumnType::Date));
        assert_eq!(columns[3], Column::new("predicted_prob", ColumnType::Float));
    }

    #[test]
    fn test_event_record_groups_descend_from_14() {
        let columns = event_record_columns();

        assert_eq!(columns[4].name, "total_voltage_14");
        assert_eq!(columns[9].name, "min_temperature_14");
        assert_eq!(columns[10].name, "total_voltage_13");
        assert_eq!(columns[87].name, "min_temperature_1");

        assert!(columns[4..]
            .iter()
            .all(|column| column.column_type == ColumnType::Float));
    }
}
