//! HTTP client for the FitDesk REST API.
//!
//! One [`Api`] value per call site, constructed from the cached token. All
//! helpers attach the auth header, log the call, and map failures into
//! [`ApiError`]. Responses are JSON envelopes keyed by resource name
//! (`{"clients": [...]}`); endpoints that signal "no content" with HTTP 204
//! decode to an empty collection so pages never see the difference.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{api_base, AUTH_HEADER};
use crate::error::{ApiError, ErrorBody};
use crate::models::*;
use crate::payloads::*;

#[derive(Clone, Debug)]
pub struct Api {
    base: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl Api {
    /// Client for the configured base URL, with the given session token (or
    /// none, for the login and health-check calls).
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(api_base(), token)
    }

    /// Client against an explicit base URL.
    pub fn with_base(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header(AUTH_HEADER, token),
            None => req,
        }
    }

    /// Map a non-success response into `ApiError::Status`, preferring the
    /// backend's own `{"message": ...}` text.
    async fn fail(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: error_message(status, &body),
        }
    }

    /// GET a collection envelope. HTTP 204 yields the envelope's default
    /// (empty) value.
    async fn get_list<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!("GET {path}");
        let response = self.authed(self.http.get(self.url(path))).send().await?;
        if response.status().as_u16() == 204 {
            return Ok(T::default());
        }
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::error!("GET {path}: {err}");
            return Err(err);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    /// GET a single-resource envelope.
    async fn get_one<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {path}");
        let response = self.authed(self.http.get(self.url(path))).send().await?;
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::error!("GET {path}: {err}");
            return Err(err);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    /// POST a JSON body, discarding any response body.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!("POST {path}");
        let response = self
            .authed(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::error!("POST {path}: {err}");
            return Err(err);
        }
        Ok(())
    }

    /// PUT a JSON body, discarding any response body.
    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!("PUT {path}");
        let response = self
            .authed(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::error!("PUT {path}: {err}");
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!("DELETE {path}");
        let response = self.authed(self.http.delete(self.url(path))).send().await?;
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::error!("DELETE {path}: {err}");
            return Err(err);
        }
        Ok(())
    }

    // ---- connectivity ----

    /// Ping `/db/checkhealth`. The app shell blocks the router on this.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        let path = "/db/checkhealth";
        let response = self.authed(self.http.get(self.url(path))).send().await?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        Ok(())
    }

    // ---- auth ----

    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
        let path = "/login";
        tracing::debug!("POST {path}");
        let response = self.http.post(self.url(path)).json(payload).send().await?;
        if !response.status().is_success() {
            let err = Self::fail(response).await;
            tracing::warn!("POST {path}: {err}");
            return Err(err);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    // ---- clients ----

    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        let env: ClientsEnvelope = self.get_list("/clients").await?;
        Ok(env.clients)
    }

    pub async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        let env: ClientEnvelope = self.get_one(&format!("/clients/{id}")).await?;
        Ok(env.client)
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<(), ApiError> {
        self.post("/clients", payload).await
    }

    pub async fn update_client(&self, id: i64, payload: &ClientPayload) -> Result<(), ApiError> {
        self.put(&format!("/clients/{id}"), payload).await
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{id}")).await
    }

    // ---- schedule ----

    pub async fn list_schedule(&self) -> Result<Vec<Schedule>, ApiError> {
        let env: ScheduleEnvelope = self.get_list("/schedule").await?;
        Ok(env.schedule)
    }

    pub async fn get_schedule(&self, id: i64) -> Result<Schedule, ApiError> {
        let env: ScheduleItemEnvelope = self.get_one(&format!("/schedule/{id}")).await?;
        Ok(env.appointment)
    }

    pub async fn create_schedule(&self, payload: &SchedulePayload) -> Result<(), ApiError> {
        self.post("/schedule", payload).await
    }

    pub async fn update_schedule(&self, id: i64, payload: &SchedulePayload) -> Result<(), ApiError> {
        self.put(&format!("/schedule/{id}"), payload).await
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/schedule/{id}")).await
    }

    // ---- measurements ----

    pub async fn list_measurements(&self) -> Result<Vec<Measurement>, ApiError> {
        let env: MeasurementsEnvelope = self.get_list("/measurements").await?;
        Ok(env.measurements)
    }

    pub async fn get_measurement(&self, id: i64) -> Result<Measurement, ApiError> {
        let env: MeasurementEnvelope = self.get_one(&format!("/measurements/{id}")).await?;
        Ok(env.measurement)
    }

    pub async fn list_client_measurements(&self, client_id: i64) -> Result<Vec<Measurement>, ApiError> {
        let env: MeasurementsEnvelope = self
            .get_list(&format!("/measurements/client/{client_id}"))
            .await?;
        Ok(env.measurements)
    }

    pub async fn create_measurement(&self, payload: &MeasurementPayload) -> Result<(), ApiError> {
        self.post("/measurements", payload).await
    }

    pub async fn delete_measurement(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/measurements/{id}")).await
    }

    // ---- workouts ----

    pub async fn list_workouts(&self) -> Result<Vec<Workout>, ApiError> {
        let env: WorkoutsEnvelope = self.get_list("/workouts").await?;
        Ok(env.workouts)
    }

    pub async fn get_workout(&self, id: i64) -> Result<Workout, ApiError> {
        let env: WorkoutEnvelope = self.get_one(&format!("/workouts/{id}")).await?;
        Ok(env.workout)
    }

    pub async fn list_client_workouts(&self, client_id: i64) -> Result<Vec<Workout>, ApiError> {
        let env: WorkoutsEnvelope = self.get_list(&format!("/workouts/client/{client_id}")).await?;
        Ok(env.workouts)
    }

    pub async fn create_workout(&self, payload: &WorkoutPayload) -> Result<(), ApiError> {
        self.post("/workouts", payload).await
    }

    pub async fn update_workout(&self, id: i64, payload: &WorkoutPayload) -> Result<(), ApiError> {
        self.put(&format!("/workouts/{id}"), payload).await
    }

    pub async fn delete_workout(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/workouts/{id}")).await
    }

    // ---- exercise catalogue ----

    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        let env: ExercisesEnvelope = self.get_list("/exercises").await?;
        Ok(env.exercises)
    }

    pub async fn get_exercise(&self, id: i64) -> Result<Exercise, ApiError> {
        let env: ExerciseEnvelope = self.get_one(&format!("/exercises/{id}")).await?;
        Ok(env.exercise)
    }

    pub async fn create_exercise(&self, payload: &ExercisePayload) -> Result<(), ApiError> {
        self.post("/exercises", payload).await
    }

    pub async fn update_exercise(&self, id: i64, payload: &ExercisePayload) -> Result<(), ApiError> {
        self.put(&format!("/exercises/{id}"), payload).await
    }

    pub async fn list_bodyparts(&self) -> Result<Vec<Bodypart>, ApiError> {
        let env: BodypartsEnvelope = self.get_list("/bodyparts").await?;
        Ok(env.bodyparts)
    }

    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        let env: EquipmentEnvelope = self.get_list("/equipment").await?;
        Ok(env.equipment)
    }

    // ---- packages & subscriptions ----

    pub async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        let env: PackagesEnvelope = self.get_list("/packages").await?;
        Ok(env.packages)
    }

    pub async fn get_package(&self, id: i64) -> Result<Package, ApiError> {
        let env: PackageEnvelope = self.get_one(&format!("/packages/{id}")).await?;
        Ok(env.package)
    }

    pub async fn create_package(&self, payload: &PackagePayload) -> Result<(), ApiError> {
        self.post("/packages", payload).await
    }

    pub async fn update_package(&self, id: i64, payload: &PackagePayload) -> Result<(), ApiError> {
        self.put(&format!("/packages/{id}"), payload).await
    }

    pub async fn list_package_subs(&self, package_id: i64) -> Result<Vec<Subscription>, ApiError> {
        let env: SubscriptionsEnvelope =
            self.get_list(&format!("/packages/{package_id}/subs")).await?;
        Ok(env.subscriptions)
    }

    pub async fn create_subscription(&self, payload: &SubscriptionPayload) -> Result<(), ApiError> {
        self.post("/subscriptions", payload).await
    }

    // ---- invoices & payments ----

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let env: InvoicesEnvelope = self.get_list("/invoices").await?;
        Ok(env.invoices)
    }

    pub async fn list_unpaid_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let env: InvoicesEnvelope = self.get_list("/invoices/unpaid").await?;
        Ok(env.invoices)
    }

    pub async fn get_invoice(&self, id: i64) -> Result<Invoice, ApiError> {
        let env: InvoiceEnvelope = self.get_one(&format!("/invoices/{id}")).await?;
        Ok(env.invoice)
    }

    pub async fn list_client_invoices(&self, client_id: i64) -> Result<Vec<Invoice>, ApiError> {
        let env: InvoicesEnvelope = self.get_list(&format!("/invoices/client/{client_id}")).await?;
        Ok(env.invoices)
    }

    pub async fn create_invoice(&self, payload: &InvoicePayload) -> Result<(), ApiError> {
        self.post("/invoices", payload).await
    }

    pub async fn list_invoice_payments(&self, invoice_id: i64) -> Result<Vec<Payment>, ApiError> {
        let env: PaymentsEnvelope = self
            .get_list(&format!("/payments/invoice/{invoice_id}"))
            .await?;
        Ok(env.payments)
    }

    pub async fn list_client_payments(&self, client_id: i64) -> Result<Vec<Payment>, ApiError> {
        let env: PaymentsEnvelope = self
            .get_list(&format!("/payments/client/{client_id}"))
            .await?;
        Ok(env.payments)
    }

    pub async fn create_payment(&self, payload: &PaymentPayload) -> Result<(), ApiError> {
        self.post("/payments", payload).await
    }

    /// Cancelling keeps the payment in the ledger but zeroes its effect.
    pub async fn cancel_payment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/payments/{id}")).await
    }

    // ---- locations ----

    pub async fn list_locations(&self) -> Result<Vec<ClientLocation>, ApiError> {
        let env: LocationsEnvelope = self.get_list("/client-locations").await?;
        Ok(env.client_locations)
    }

    pub async fn get_location(&self, id: i64) -> Result<ClientLocation, ApiError> {
        let env: LocationEnvelope = self.get_one(&format!("/client-locations/{id}")).await?;
        Ok(env.client_location)
    }

    pub async fn create_location(&self, payload: &LocationPayload) -> Result<(), ApiError> {
        self.post("/client-locations", payload).await
    }

    pub async fn update_location(&self, id: i64, payload: &LocationPayload) -> Result<(), ApiError> {
        self.put(&format!("/client-locations/{id}"), payload).await
    }

    // ---- users ----

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let env: UserEnvelope = self.get_one(&format!("/user/{id}")).await?;
        Ok(env.user)
    }
}

fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    if body.trim().is_empty() {
        format!("o servidor respondeu com o estado {status}")
    } else {
        body.trim().to_string()
    }
}

// Response envelopes, keyed by resource name.

#[derive(Debug, Default, Deserialize)]
struct ClientsEnvelope {
    clients: Vec<Client>,
}

#[derive(Debug, Deserialize)]
struct ClientEnvelope {
    client: Client,
}

#[derive(Debug, Default, Deserialize)]
struct ScheduleEnvelope {
    schedule: Vec<Schedule>,
}

#[derive(Debug, Deserialize)]
struct ScheduleItemEnvelope {
    appointment: Schedule,
}

#[derive(Debug, Default, Deserialize)]
struct MeasurementsEnvelope {
    measurements: Vec<Measurement>,
}

#[derive(Debug, Deserialize)]
struct MeasurementEnvelope {
    measurement: Measurement,
}

#[derive(Debug, Default, Deserialize)]
struct WorkoutsEnvelope {
    workouts: Vec<Workout>,
}

#[derive(Debug, Deserialize)]
struct WorkoutEnvelope {
    workout: Workout,
}

#[derive(Debug, Default, Deserialize)]
struct ExercisesEnvelope {
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct ExerciseEnvelope {
    exercise: Exercise,
}

#[derive(Debug, Default, Deserialize)]
struct BodypartsEnvelope {
    bodyparts: Vec<Bodypart>,
}

#[derive(Debug, Default, Deserialize)]
struct EquipmentEnvelope {
    equipment: Vec<Equipment>,
}

#[derive(Debug, Default, Deserialize)]
struct PackagesEnvelope {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct PackageEnvelope {
    package: Package,
}

#[derive(Debug, Default, Deserialize)]
struct SubscriptionsEnvelope {
    subscriptions: Vec<Subscription>,
}

#[derive(Debug, Default, Deserialize)]
struct InvoicesEnvelope {
    invoices: Vec<Invoice>,
}

#[derive(Debug, Deserialize)]
struct InvoiceEnvelope {
    invoice: Invoice,
}

#[derive(Debug, Default, Deserialize)]
struct PaymentsEnvelope {
    payments: Vec<Payment>,
}

#[derive(Debug, Default, Deserialize)]
struct LocationsEnvelope {
    client_locations: Vec<ClientLocation>,
}

#[derive(Debug, Deserialize)]
struct LocationEnvelope {
    client_location: ClientLocation,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_json() {
        assert_eq!(
            error_message(422, r#"{"message":"data em falta"}"#),
            "data em falta"
        );
        assert_eq!(error_message(500, "boom"), "boom");
        assert_eq!(
            error_message(502, "  "),
            "o servidor respondeu com o estado 502"
        );
    }

    #[test]
    fn test_list_envelope_decodes() {
        let body = r#"{"clients": [{"id": 1, "first_name": "Ana", "last_name": "Reis"}]}"#;
        let env: ClientsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(env.clients.len(), 1);
        assert_eq!(env.clients[0].full_name(), "Ana Reis");
    }

    #[test]
    fn test_single_envelope_decodes() {
        let body = r#"{"invoice": {
            "id": 1, "client_id": 2,
            "issue_date": "2026-01-01", "due_date": "2026-02-01",
            "total": 100.0, "status": "pending"
        }}"#;
        let env: InvoiceEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(env.invoice.total, 100.0);
    }

    #[test]
    fn test_url_join() {
        let api = Api::with_base("https://fit.example/api/v1", None);
        assert_eq!(api.url("/clients"), "https://fit.example/api/v1/clients");
    }
}
