//! Hash-based client routes: `#/`, `#/jobs/{id}`, `#/jobs/{id}/apply`, `#/admin`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    JobDetail(String),
    Apply(String),
    Admin,
    NotFound,
}

impl Route {
    /// Parses `location.hash`. An empty hash is the home page.
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["admin"] => Route::Admin,
            ["jobs", id] => Route::JobDetail(id.to_string()),
            ["jobs", id, "apply"] => Route::Apply(id.to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::JobDetail(id) => format!("#/jobs/{}", id),
            Route::Apply(id) => format!("#/jobs/{}/apply", id),
            Route::Admin => "#/admin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#"), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/admin"), Route::Admin);
        assert_eq!(Route::parse("#/jobs/abc"), Route::JobDetail("abc".to_string()));
        assert_eq!(Route::parse("#/jobs/abc/"), Route::JobDetail("abc".to_string()));
        assert_eq!(Route::parse("#/jobs/abc/apply"), Route::Apply("abc".to_string()));
        assert_eq!(Route::parse("#/jobs"), Route::NotFound);
        assert_eq!(Route::parse("#/jobs/abc/edit"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trips() {
        for route in [
            Route::Home,
            Route::Admin,
            Route::JobDetail("42".to_string()),
            Route::Apply("42".to_string()),
        ] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
