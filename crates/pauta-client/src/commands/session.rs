//! Session shell: mock login/logout, navigation, profile modal.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;

use pauta_store::User;

use crate::collaborators::{Credentials, IdentityProvider};
use crate::state::{AppState, View};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub team: String,
    pub avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            name: u.name,
            email: u.email,
            team: u.team,
            avatar: u.avatar,
        }
    }
}

/// Login form fields as submitted by the auth page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    pub team: String,
}

pub async fn login(
    state: &Arc<Mutex<AppState>>,
    provider: &dyn IdentityProvider,
    form: LoginForm,
) -> Result<UserDto, String> {
    let user = provider
        .authenticate(Credentials::Password {
            name: form.name,
            email: form.email,
            password: form.password,
            team: form.team,
        })
        .await
        .map_err(|e| format!("Login failed: {e}"))?;

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.current_user = Some(user.clone());

    info!(email = %user.email, team = %user.team, "User signed in");
    Ok(user.into())
}

/// OAuth-style login; only the team is asked for locally.
pub async fn login_delegated(
    state: &Arc<Mutex<AppState>>,
    provider: &dyn IdentityProvider,
    team: String,
) -> Result<UserDto, String> {
    let user = provider
        .authenticate(Credentials::Delegated { team })
        .await
        .map_err(|e| format!("Login failed: {e}"))?;

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.current_user = Some(user.clone());

    info!(email = %user.email, "User signed in (delegated)");
    Ok(user.into())
}

/// Discard the session user.  Store contents survive within the process,
/// but the login screen gates every view again.
pub fn logout(state: &Arc<Mutex<AppState>>) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.current_user = None;
    guard.selected_post_id = None;
    guard.is_profile_open = false;

    info!("User signed out");
    Ok(())
}

pub fn current_user(state: &Arc<Mutex<AppState>>) -> Result<Option<UserDto>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.current_user.clone().map(UserDto::from))
}

pub fn set_active_view(state: &Arc<Mutex<AppState>>, view: View) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.active_view = view;
    Ok(())
}

pub fn open_profile(state: &Arc<Mutex<AppState>>) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.is_profile_open = true;
    Ok(())
}

pub fn close_profile(state: &Arc<Mutex<AppState>>) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.is_profile_open = false;
    Ok(())
}
