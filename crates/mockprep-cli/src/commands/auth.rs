use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use mockprep_core::PrepError;

use super::utils::{AppContext, print_hint, read_password, value_or_prompt};

pub async fn login(ctx: &AppContext, email: Option<String>) -> Result<()> {
    let email = value_or_prompt(email, "Email: ")?;
    let password = read_password("Password: ")?;

    let context = ctx
        .auth_usecase()?
        .login(&email, &password)
        .await
        .map_err(failed("Sign-in"))?;
    println!(
        "{}",
        format!("Signed in as {} ({})", context.email, context.role).bright_green()
    );
    Ok(())
}

pub async fn register(ctx: &AppContext, email: Option<String>) -> Result<()> {
    let email = value_or_prompt(email, "Email: ")?;
    print_hint(
        "Password: 8+ characters with uppercase, lowercase, number and one of @$!%*?&",
    );
    let password = read_password("Password: ")?;
    let confirm = read_password("Confirm password: ")?;

    let context = ctx
        .auth_usecase()?
        .register(&email, &password, &confirm)
        .await
        .map_err(failed("Registration"))?;
    println!(
        "{}",
        format!("Account created. Signed in as {} ({})", context.email, context.role)
            .bright_green()
    );
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth_usecase()?
        .logout()
        .await
        .context("Failed to remove saved sign-in")?;
    println!("{}", "Signed out.".bright_green());
    Ok(())
}

/// Prints the saved user after checking the token with the server.
pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let context = ctx.auth_usecase()?.verify().await?;
    println!("{} {}", "Email:".bold(), context.email);
    println!("{} {}", "Role: ".bold(), context.role);
    Ok(())
}

/// Reports the server's own wording (for example "Email already registered")
/// rather than the status-prefixed error.
fn failed(action: &'static str) -> impl FnOnce(PrepError) -> anyhow::Error {
    move |err| anyhow!("{action} failed: {}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_uses_server_message() {
        let err = failed("Registration")(PrepError::api(400, "Email already registered"));
        assert_eq!(err.to_string(), "Registration failed: Email already registered");

        let err = failed("Sign-in")(PrepError::validation("Password is required"));
        assert_eq!(err.to_string(), "Sign-in failed: Password is required");
    }
}
