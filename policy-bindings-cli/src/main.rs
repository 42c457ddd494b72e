//! Command-line front end for the policy bindings editor.
//!
//! Reads a JSON policy document from disk, applies a single add or remove
//! edit, and writes the result back (to the input file unless an output path
//! is given). Malformed input and editor-reported conflicts both exit nonzero
//! without writing anything.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use policy_bindings_editor::{add_member, remove_member, Policy, Principal, PrincipalKind};

#[derive(Parser)]
#[command(
    name = "policy-bindings",
    version,
    about = "Add or remove a principal in the role bindings of a JSON policy document"
)]
struct Cli {
    /// Input policy file (must be JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output policy file; the input file is overwritten when not given
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Edit to perform
    #[arg(short, long, value_enum)]
    action: Action,

    /// Email of the user or service account
    #[arg(short, long)]
    email: String,

    /// Type of principal the email names
    #[arg(short = 't', long = "type", value_enum, default_value = "serviceAccount")]
    principal_type: PrincipalType,

    /// Role whose binding is edited
    #[arg(short, long)]
    role: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Action {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrincipalType {
    User,
    #[value(name = "serviceAccount")]
    ServiceAccount,
}

impl From<PrincipalType> for PrincipalKind {
    fn from(value: PrincipalType) -> Self {
        match value {
            PrincipalType::User => Self::User,
            PrincipalType::ServiceAccount => Self::ServiceAccount,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(args: Cli) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let policy: Policy = serde_json::from_str(&raw).with_context(|| {
        format!(
            "{} does not contain a valid policy document",
            args.input.display()
        )
    })?;

    let principal = Principal::new(args.principal_type.into(), args.email).to_string();
    debug!("{:?} of {principal} for role {}", args.action, args.role);

    let updated = match args.action {
        Action::Add => add_member(&policy, &principal, &args.role),
        Action::Remove => remove_member(&policy, &principal, &args.role),
    }
    .context("could not perform update")?;

    let rendered = updated
        .to_json_pretty()
        .context("failed to serialize updated policy")?;
    let out = args.output.as_ref().unwrap_or(&args.input);
    fs::write(out, &rendered).with_context(|| format!("failed to write {}", out.display()))?;
    println!("{rendered}");
    info!("wrote updated policy to {}", out.display());

    Ok(())
}
