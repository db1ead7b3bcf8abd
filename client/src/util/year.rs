//! Current calendar year for the footer.
//!
//! Uses the browser clock when hydrated and the server clock otherwise, so the
//! server-rendered markup and the hydrated page agree outside of New Year's Eve.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

pub const BRAND_NAME: &str = "GG Accesorios";

/// Calendar year of "now" in the local (browser) or UTC (server) clock.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. Todos los derechos reservados.")
}
