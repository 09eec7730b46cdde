//! Stand-in identity collaborator.
//!
//! Performs no real verification: any credentials with the required
//! fields filled are accepted.  A production deployment replaces this
//! with a real identity provider behind the same trait.

use async_trait::async_trait;
use pauta_shared::AuthError;
use pauta_store::User;

use crate::collaborators::{Credentials, IdentityProvider};

/// Accepts any non-empty credentials.
#[derive(Debug, Default)]
pub struct OpenIdentity;

#[async_trait]
impl IdentityProvider for OpenIdentity {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError> {
        match credentials {
            Credentials::Password {
                name,
                email,
                password,
                team,
            } => {
                if email.trim().is_empty() {
                    return Err(AuthError::MissingField("email"));
                }
                if password.trim().is_empty() {
                    return Err(AuthError::MissingField("password"));
                }
                if team.trim().is_empty() {
                    return Err(AuthError::MissingField("team"));
                }

                // Name falls back to the local part of the email.
                let name = if name.trim().is_empty() {
                    email.split('@').next().unwrap_or(&email).to_string()
                } else {
                    name
                };

                Ok(User {
                    name,
                    email,
                    team,
                    avatar: None,
                })
            }
            Credentials::Delegated { team } => {
                if team.trim().is_empty() {
                    return Err(AuthError::MissingField("team"));
                }
                Ok(User {
                    name: "Usuário Google".to_string(),
                    email: "usuario@gmail.com".to_string(),
                    team,
                    avatar: Some(
                        "https://lh3.googleusercontent.com/ogw/default=s32-c-mo".to_string(),
                    ),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_login_requires_email_password_and_team() {
        let provider = OpenIdentity;
        let missing = Credentials::Password {
            name: String::new(),
            email: "ana@techstart.dev".to_string(),
            password: String::new(),
            team: "Marketing".to_string(),
        };
        assert_eq!(
            provider.authenticate(missing).await.unwrap_err(),
            AuthError::MissingField("password")
        );
    }

    #[tokio::test]
    async fn name_defaults_to_email_local_part() {
        let provider = OpenIdentity;
        let user = provider
            .authenticate(Credentials::Password {
                name: String::new(),
                email: "ana@techstart.dev".to_string(),
                password: "s3nha".to_string(),
                team: "Marketing Digital LTDA".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "ana");
        assert_eq!(user.team, "Marketing Digital LTDA");
    }

    #[tokio::test]
    async fn delegated_login_needs_a_team() {
        let provider = OpenIdentity;
        assert!(provider
            .authenticate(Credentials::Delegated {
                team: String::new()
            })
            .await
            .is_err());

        let user = provider
            .authenticate(Credentials::Delegated {
                team: "Social".to_string(),
            })
            .await
            .unwrap();
        assert!(user.avatar.is_some());
    }
}
