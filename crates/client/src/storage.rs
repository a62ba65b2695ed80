//! Token persistence.
//!
//! The session token survives a reload/restart:
//! - Web: a `token` cookie with a 7-day `max-age`.
//! - Desktop: a JSON file in the platform config directory
//!   (`~/.config/mandazap/` on Linux).

const TOKEN_KEY: &str = "token";
const TOKEN_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

pub fn load_token() -> Option<String> {
    load_raw()
}

pub fn save_token(token: &str) {
    save_raw(token);
}

pub fn remove_token() {
    remove_raw();
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into().ok()
}

#[cfg(target_arch = "wasm32")]
fn load_raw() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == TOKEN_KEY && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn save_raw(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{TOKEN_KEY}={token}; path=/; max-age={TOKEN_MAX_AGE_SECS}; samesite=lax"
        ));
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_raw() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{TOKEN_KEY}=; path=/; max-age=0"));
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn session_file() -> Option<std::path::PathBuf> {
    let app_dir = dirs::config_dir()?.join("mandazap");
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir).ok()?;
    }
    Some(app_dir.join("session.json"))
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(serde::Serialize, serde::Deserialize)]
struct StoredSession {
    token: String,
    saved_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw() -> Option<String> {
    let path = session_file()?;
    let data = std::fs::read_to_string(path).ok()?;
    let session: StoredSession = serde_json::from_str(&data).ok()?;

    // Same lifetime as the web cookie.
    let age = chrono::Utc::now() - session.saved_at;
    if age.num_seconds() > TOKEN_MAX_AGE_SECS as i64 {
        remove_raw();
        return None;
    }
    Some(session.token)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(token: &str) {
    let Some(path) = session_file() else {
        return;
    };
    let session = StoredSession {
        token: token.to_string(),
        saved_at: chrono::Utc::now(),
    };
    if let Ok(data) = serde_json::to_string(&session) {
        let _ = std::fs::write(path, data);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw() {
    if let Some(path) = session_file() {
        let _ = std::fs::remove_file(path);
    }
}
