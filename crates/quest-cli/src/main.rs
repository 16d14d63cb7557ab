pub mod builder;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use builder::{example_questionnaire, example_registry};
use quest_lib::HashAuthenticator;
use quest_spec::{InputType, Questionnaire, compute_dynamic_content, navigable_pages};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Questionnaire template toolbox",
    long_about = "Validates, inspects, and generates questionnaire template JSON documents"
)]
struct Cli {
    /// Show debug output, e.g. radio value assignments during normalization.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full creation-time pipeline over a template and report the
    /// first violation, if any.
    Validate {
        /// Path to the questionnaire template JSON.
        template: PathBuf,
    },
    /// Print a text digest of a template: pages, navigation, inputs.
    Show {
        /// Path to the questionnaire template JSON.
        template: PathBuf,
        /// Language to render labels in; defaults to the template's own.
        #[arg(long, value_name = "CODE")]
        lang: Option<String>,
    },
    /// Emit the built-in example questionnaire.
    Example {
        /// Write to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Emit the JSON schema of the template document.
    Schema,
    /// Compute a passwordless login hash for a mail link.
    Hash {
        #[arg(long)]
        salt: String,
        /// Respondent user id.
        #[arg(short = 'u', long)]
        user: String,
        /// Survey id attribute.
        #[arg(long)]
        sid: Option<String>,
        /// Wave id attribute.
        #[arg(long)]
        wid: Option<String>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Validate { template } => run_validate(template),
        Command::Show { template, lang } => run_show(template, lang),
        Command::Example { out } => run_example(out),
        Command::Schema => run_schema(),
        Command::Hash {
            salt,
            user,
            sid,
            wid,
        } => run_hash(salt, user, sid, wid),
    }
}

fn load_template(path: &PathBuf) -> CliResult<Questionnaire> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_validate(template: PathBuf) -> CliResult<()> {
    let mut q = load_template(&template)?;
    let registry = example_registry();
    q.finalize(&registry)?;
    println!(
        "{}: valid ({} pages, {} languages)",
        template.display(),
        q.pages.len(),
        q.lang_codes.len()
    );
    Ok(())
}

fn run_show(template: PathBuf, lang: Option<String>) -> CliResult<()> {
    let mut q = load_template(&template)?;
    let registry = example_registry();
    q.finalize(&registry)?;
    if let Some(lang) = lang {
        q.lang_code = lang;
    }
    for page_idx in 0..q.pages.len() {
        compute_dynamic_content(&mut q, page_idx, &registry)?;
    }

    let locales = q.locales();
    let navigable = navigable_pages(&q, &registry);

    let mut lines = Vec::new();
    lines.push(format!(
        "Survey: {} ({}, wave {})",
        q.survey.name.tr_silent(&q.lang_code, &locales),
        q.survey.ty,
        q.survey.wave_id
    ));
    lines.push(format!("Languages: {}", q.lang_codes_order.join(", ")));

    for (page_idx, page) in q.pages.iter().enumerate() {
        let marker = if navigable.contains(&page_idx) {
            format!("#{}", page.navigational_num)
        } else {
            "hidden".to_string()
        };
        lines.push(format!(
            "Page {} [{}]: {}",
            page_idx,
            marker,
            page.short.tr(&q.lang_code, &locales)
        ));
        for group in &page.groups {
            for input in &group.inputs {
                if input.is_layout() && input.kind != InputType::Dynamic {
                    continue;
                }
                let name = if input.name.is_empty() {
                    "<unnamed>"
                } else {
                    input.name.as_str()
                };
                let mut entry = format!(" - {} ({})", name, kind_label(input.kind));
                if let Some(validator) = &input.validator {
                    entry.push_str(&format!(" [validator: {validator}]"));
                }
                if input.kind == InputType::Dynamic {
                    entry.push_str(&format!(
                        " = {}",
                        input.label.tr_silent(&q.lang_code, &locales)
                    ));
                } else if !input.response.is_empty() {
                    entry.push_str(&format!(" = {}", input.response));
                }
                lines.push(entry);
            }
        }
    }

    println!("{}", lines.join("\n"));
    Ok(())
}

fn run_example(out: Option<PathBuf>) -> CliResult<()> {
    let mut q = example_questionnaire();
    q.finalize(&example_registry())?;
    let raw = serde_json::to_string_pretty(&q)?;
    match out {
        Some(path) => {
            fs::write(&path, raw)?;
            println!("wrote {}", path.display());
        }
        None => println!("{raw}"),
    }
    Ok(())
}

fn run_schema() -> CliResult<()> {
    let schema = quest_spec::template_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn run_hash(salt: String, user: String, sid: Option<String>, wid: Option<String>) -> CliResult<()> {
    let auth = HashAuthenticator::new(salt);
    let mut params = BTreeMap::from([("u".to_string(), user)]);
    if let Some(sid) = sid {
        params.insert("sid".to_string(), sid);
    }
    if let Some(wid) = wid {
        params.insert("wid".to_string(), wid);
    }
    println!("{}", auth.sign(&params));
    Ok(())
}

fn kind_label(kind: InputType) -> &'static str {
    match kind {
        InputType::Text => "text",
        InputType::Number => "number",
        InputType::Textarea => "textarea",
        InputType::Dropdown => "dropdown",
        InputType::Radio => "radio",
        InputType::Checkbox => "checkbox",
        InputType::Button => "button",
        InputType::Textblock => "textblock",
        InputType::Dynamic => "dynamic",
        InputType::DynComposite => "dyn-composite",
        InputType::DynCompositeScalar => "dyn-composite-scalar",
        InputType::Hidden => "hidden",
    }
}
