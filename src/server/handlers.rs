use crate::*;
use actix_web::HttpResponse;
use actix_web::web;
use std::collections::HashMap;

pub const GREETING: &str = "Hello Candidate, Good luck for this round";
pub const SERVER_ERROR: &str = "Server error";

/// Log the underlying cause and answer with the fixed 500 body.
fn failure(context: &str, cause: impl std::fmt::Display) -> HttpResponse {
    log::error!("{}: {}", context, cause);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": SERVER_ERROR }))
}

fn rejection(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message.to_string() }))
}

/// Path identifiers are checked for presence and integer shape only.
fn identify(raw: &str) -> Result<i64, HttpResponse> {
    match raw.trim() {
        "" => Err(rejection("Policy ID is required")),
        id => id
            .parse::<i64>()
            .map_err(|_| rejection("Policy ID must be an integer")),
    }
}

pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().body(GREETING)
}

pub async fn list<R: PolicyRepository>(
    repo: web::Data<R>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let listing = match Listing::parse(&query) {
        Ok(listing) => listing,
        Err(e) => return rejection(e),
    };
    let data = match repo.search(&listing).await {
        Ok(rows) => rows,
        Err(e) => return failure("error fetching policies", e),
    };
    match repo.count(&listing).await {
        Ok(total) => HttpResponse::Ok().json(listing.paginate(total, data)),
        Err(e) => failure("error counting policies", e),
    }
}

pub async fn fetch<R: PolicyRepository>(repo: web::Data<R>, id: web::Path<String>) -> HttpResponse {
    let id = match identify(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match repo.lookup(id).await {
        Ok(Some(policy)) => HttpResponse::Ok().json(policy),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({ "error": "Policy not found" })),
        Err(e) => failure("error fetching policy", e),
    }
}

pub async fn create<R: PolicyRepository>(
    repo: web::Data<R>,
    body: web::Json<Policy>,
) -> HttpResponse {
    match repo.create(&body).await {
        Ok(policy) => HttpResponse::Created().json(policy),
        Err(e) => failure("error inserting policy", e),
    }
}

/// Full overwrite. A key with no row is reported as a server error,
/// the same way a failed statement is.
pub async fn update<R: PolicyRepository>(
    repo: web::Data<R>,
    id: web::Path<String>,
    body: web::Json<Terms>,
) -> HttpResponse {
    let id = match identify(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match repo.update(id, &body).await {
        Ok(Some(policy)) => HttpResponse::Ok().json(policy),
        Ok(None) => failure("error updating policy", format!("no row returned for {}", id)),
        Err(e) => failure("error updating policy", e),
    }
}

/// Idempotent: deleting a missing key still answers 204.
pub async fn delete<R: PolicyRepository>(
    repo: web::Data<R>,
    id: web::Path<String>,
) -> HttpResponse {
    let id = match identify(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match repo.delete(id).await {
        Ok(n) => {
            log::debug!("deleted {} row(s) for policy {}", n, id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => failure("error deleting policy", e),
    }
}
