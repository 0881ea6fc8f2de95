use serde::Serialize;
use serde_json::json;

/// HTTP verbs the harness issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Patch => "PATCH",
        }
    }
}

/// One declared endpoint check. Built once at suite-definition time and
/// never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeSpec {
    pub verb: Verb,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ProbeSpec {
    pub fn get(path: &'static str) -> Self {
        Self {
            verb: Verb::Get,
            path,
            body: None,
        }
    }

    pub fn post(path: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            path,
            body: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A named, ordered collection of probes covering one API domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainGroup {
    pub name: &'static str,
    pub probes: Vec<ProbeSpec>,
}

/// The fixed v2 surface under verification, in reporting order.
///
/// The login credentials are deliberately bogus: the sweep asserts that the
/// route answers, not that it authenticates anyone.
pub fn v2_suite() -> Vec<DomainGroup> {
    vec![
        DomainGroup {
            name: "auth",
            probes: vec![
                ProbeSpec::get("/api/v2/auth/me"),
                ProbeSpec::post("/api/v2/auth/login").with_body(json!({
                    "email": "smoke@test.dev",
                    "password": "not-a-password",
                })),
                ProbeSpec::post("/api/v2/auth/logout"),
            ],
        },
        DomainGroup {
            name: "properties",
            probes: vec![
                ProbeSpec::get("/api/v2/properties"),
                ProbeSpec::get("/api/v2/properties/1"),
                ProbeSpec::get("/api/v2/properties/1/amenities"),
            ],
        },
        DomainGroup {
            name: "applications",
            probes: vec![
                ProbeSpec::get("/api/v2/applications/1"),
                ProbeSpec::get("/api/v2/applications/user/1"),
                ProbeSpec::get("/api/v2/applications/property/1"),
            ],
        },
        DomainGroup {
            name: "payments",
            probes: vec![
                ProbeSpec::get("/api/v2/payments/1/receipt"),
                ProbeSpec::get("/api/v2/payments/audit-logs"),
            ],
        },
        DomainGroup {
            name: "leases",
            probes: vec![
                ProbeSpec::get("/api/v2/leases/1/payment-history"),
                ProbeSpec::get("/api/v2/leases/1/rent-payments"),
            ],
        },
        DomainGroup {
            name: "admin",
            probes: vec![
                ProbeSpec::get("/api/v2/admin/settings"),
                ProbeSpec::get("/api/v2/admin/personas"),
            ],
        },
    ]
}
