use crate::auth::{Authenticator, Credentials, MockAuthenticator, SessionStore};
use crate::cli::commands::common::session_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::DataSet;
use crate::ui::messages::{field, success, warning};
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => read_password()?,
        };

        // the directory only maps usernames to employee ids
        let employees = DataSet::load(&cfg.data_path())
            .map(|d| d.employees)
            .unwrap_or_default();

        let authenticator = MockAuthenticator::new(employees).with_domain(&cfg.email_domain);
        let session = authenticator.authenticate(&Credentials::new(username.as_str(), password))?;

        session_store(cfg).save(&session)?;
        success(format!(
            "Logged in as {} ({})",
            session.user.name,
            session.user.role.as_str()
        ));
    }
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let store = session_store(cfg);
    match store.load()? {
        Some(s) => {
            store.clear()?;
            success(format!("Logged out {}", s.user.username));
        }
        None => warning("Not logged in."),
    }
    Ok(())
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    match session_store(cfg).load()? {
        Some(s) => {
            field("User", &s.user.username, 10);
            field("Name", &s.user.name, 10);
            field("Email", &s.user.email, 10);
            field("Id", &s.user.id, 10);
            field("Role", s.user.role.as_str(), 10);
            field("Since", s.issued_at.format("%Y-%m-%d %H:%M"), 10);
        }
        None => warning("Not logged in."),
    }
    Ok(())
}

fn read_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
