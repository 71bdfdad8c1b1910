use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchasable service tier (e.g. "3x por semana, 3 meses").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub sessions_per_week: Option<u32>,
    /// Length of an enrollment in days. Older backend payloads omit it.
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// A client's enrollment in a package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub client_id: i64,
    pub package_id: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Embedded package, when the backend expands it.
    #[serde(default)]
    pub package: Option<Package>,
}

/// Invoice status, computed server-side. The client only displays it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
    /// Forward-compatibility with backend statuses this build doesn't know.
    #[serde(other)]
    Unknown,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pendente",
            InvoiceStatus::Paid => "Paga",
            InvoiceStatus::Overdue => "Vencida",
            InvoiceStatus::Cancelled => "Anulada",
            InvoiceStatus::Unknown => "—",
        }
    }
}

/// An invoice issued to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub client_id: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Invoice {
    /// Sum of the non-cancelled payments registered against this invoice.
    pub fn paid_total(&self, payments: &[Payment]) -> f64 {
        payments
            .iter()
            .filter(|p| !p.cancelled)
            .map(|p| p.amount)
            .sum()
    }

    /// What is still owed: total minus paid, floored at zero.
    pub fn pending_total(&self, payments: &[Payment]) -> f64 {
        (self.total - self.paid_total(payments)).max(0.0)
    }
}

/// Listing sort: soonest due date first, ties by id.
pub fn by_due_date(a: &Invoice, b: &Invoice) -> std::cmp::Ordering {
    a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id))
}

/// A payment registered against an invoice. Cancelled payments stay in the
/// ledger but count for nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub invoice_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: i64, due: &str, total: f64) -> Invoice {
        Invoice {
            id,
            client_id: 1,
            issue_date: "2026-01-01".parse().unwrap(),
            due_date: due.parse().unwrap(),
            total,
            status: InvoiceStatus::Pending,
            notes: None,
            payments: Vec::new(),
        }
    }

    fn payment(id: i64, amount: f64, cancelled: bool) -> Payment {
        Payment {
            id,
            invoice_id: 1,
            date: "2026-01-10".parse().unwrap(),
            amount,
            method: None,
            cancelled,
        }
    }

    #[test]
    fn test_ledger_excludes_cancelled_payments() {
        let inv = invoice(1, "2026-02-01", 100.0);
        let payments = vec![
            payment(1, 40.0, false),
            payment(2, 20.0, false),
            payment(3, 10.0, true),
        ];
        assert_eq!(inv.paid_total(&payments), 60.0);
        assert_eq!(inv.pending_total(&payments), 40.0);
    }

    #[test]
    fn test_pending_never_negative() {
        let inv = invoice(1, "2026-02-01", 50.0);
        let payments = vec![payment(1, 80.0, false)];
        assert_eq!(inv.pending_total(&payments), 0.0);
    }

    #[test]
    fn test_sort_by_due_date() {
        let mut invoices = vec![
            invoice(1, "2026-03-01", 10.0),
            invoice(2, "2026-01-15", 10.0),
            invoice(3, "2026-02-01", 10.0),
        ];
        invoices.sort_by(by_due_date);
        assert_eq!(
            invoices.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn test_unknown_status_decodes() {
        let json = r#"{
            "id": 1, "client_id": 2,
            "issue_date": "2026-01-01", "due_date": "2026-02-01",
            "total": 80.0, "status": "disputed"
        }"#;
        let inv: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(inv.status, InvoiceStatus::Unknown);
        assert_eq!(inv.status.label(), "—");
    }
}
