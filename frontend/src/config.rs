#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend started with `cargo run` in backend/
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend itself
}

/// Where the contact form posts.
pub fn contact_action() -> String {
    format!("{}/contact", get_backend_url())
}
