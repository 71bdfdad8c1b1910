//! Client-side listing filters. Collections are fetched whole and filtered
//! in memory on every keystroke or selection change; there is no
//! pagination anywhere in the app.

use api::{Exercise, Invoice, InvoiceStatus};

/// Exercises targeting the selected bodypart; `None` means no filter.
pub fn by_bodypart(exercises: &[Exercise], bodypart_id: Option<i64>) -> Vec<Exercise> {
    match bodypart_id {
        None => exercises.to_vec(),
        Some(id) => exercises
            .iter()
            .filter(|e| e.bodyparts.iter().any(|b| b.id == id))
            .cloned()
            .collect(),
    }
}

/// Invoices in the selected status; `None` means no filter.
pub fn by_status(invoices: &[Invoice], status: Option<InvoiceStatus>) -> Vec<Invoice> {
    match status {
        None => invoices.to_vec(),
        Some(wanted) => invoices
            .iter()
            .filter(|i| i.status == wanted)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Bodypart, MeasurementKind};

    fn exercise(id: i64, bodypart_ids: &[i64]) -> Exercise {
        Exercise {
            id,
            name: format!("ex-{id}"),
            description: None,
            measurement_1: MeasurementKind::Reps,
            measurement_2: None,
            bodyparts: bodypart_ids
                .iter()
                .map(|id| Bodypart {
                    id: *id,
                    name: format!("bp-{id}"),
                })
                .collect(),
            equipment: Vec::new(),
            media: Vec::new(),
        }
    }

    #[test]
    fn test_bodypart_filter() {
        let exercises = vec![exercise(1, &[1, 2]), exercise(2, &[3]), exercise(3, &[2])];
        let hits = by_bodypart(&exercises, Some(2));
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(by_bodypart(&exercises, None).len(), 3);
    }

    #[test]
    fn test_status_filter() {
        fn invoice(id: i64, status: InvoiceStatus) -> Invoice {
            Invoice {
                id,
                client_id: 1,
                issue_date: "2026-01-01".parse().unwrap(),
                due_date: "2026-02-01".parse().unwrap(),
                total: 10.0,
                status,
                notes: None,
                payments: Vec::new(),
            }
        }
        let invoices = vec![
            invoice(1, InvoiceStatus::Paid),
            invoice(2, InvoiceStatus::Pending),
            invoice(3, InvoiceStatus::Paid),
        ];
        let hits = by_status(&invoices, Some(InvoiceStatus::Paid));
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
