mod error;
mod paths;
mod render;
mod terminal;

use std::fs;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use blogadmin_lib::AdminClient;
use blogadmin_lib::config::ApiConfig;
use blogadmin_lib::controller::EntityPage;
use blogadmin_lib::controller::Navigator;
use blogadmin_lib::controller::PageServices;
use blogadmin_lib::controller::breadcrumbs;
use blogadmin_lib::model::Resource;
use blogadmin_lib::model::dto::LoginDto;
use blogadmin_lib::model::dto::RegisterDto;
use blogadmin_lib::storage::LocalStorage;
use blogadmin_lib::storage::SqliteStorage;
use blogadmin_lib::table::Action;
use blogadmin_lib::table::SortDirection;
use clap::Parser;
use clap::Subcommand;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::error::CliError;
use crate::terminal::StdinConfirmer;
use crate::terminal::TerminalNavigator;
use crate::terminal::TerminalNotifier;

#[derive(Parser)]
#[command(name = "blogadmin")]
#[command(about = "Manage blog articles, categories and users", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL (defaults to BLOGADMIN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log debug output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List a collection
    List {
        /// articles, categories or users
        resource: Resource,

        /// Filter on the searchable fields
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Field to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
    },
    /// Delete a record after confirmation
    Delete {
        resource: Resource,
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Log in and remember the session
    Login {
        email: String,

        /// Read from a prompt when omitted
        #[arg(long, env = "BLOGADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account and remember the session
    Register {
        user_name: String,
        email: String,
    },
    /// Forget the stored session
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("Logging disabled ({}): {}", path.display(), e),
    }
}

async fn open_storage() -> Result<LocalStorage, CliError> {
    let Some(path) = paths::storage_db() else {
        log::warn!("No data directory; session will not persist");
        return Ok(LocalStorage::in_memory());
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    Ok(LocalStorage::new(SqliteStorage::open(&path).await?))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match cli.api_url {
        Some(url) => ApiConfig::new(url)?,
        None => ApiConfig::from_env()?,
    };
    let storage = open_storage().await?;

    let start = match &cli.command {
        Command::List { resource, .. } | Command::Delete { resource, .. } => resource.route(),
        _ => "/".to_string(),
    };
    let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator::new(start));

    let client = AdminClient::from_config(config, storage)
        .shared_navigator(navigator.clone())
        .build()?;

    match cli.command {
        Command::List {
            resource,
            search,
            sort,
            desc,
            page,
        } => {
            let mut entity_page = EntityPage::for_resource(resource, services(&client, navigator, false));
            if !entity_page.load().await {
                return Ok(());
            }

            let table = entity_page.table_mut();
            if let Some(search) = search {
                table.set_search(search);
            }
            if let Some(sort) = sort {
                let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
                table.sort_by(sort, direction);
            }
            table.set_page(page);

            println!("{}", render::breadcrumb_text(&breadcrumbs(&resource.route())));
            print!("{}", render::table_text(&entity_page.table().render()));
            Ok(())
        }
        Command::Delete { resource, id, yes } => {
            let mut entity_page = EntityPage::for_resource(resource, services(&client, navigator, yes));
            if !entity_page.load().await {
                return Ok(());
            }
            if entity_page.trigger_for_id(Action::Delete, &id).await {
                Ok(())
            } else {
                Err(CliError::NotFound {
                    resource: resource.to_string(),
                    id,
                })
            }
        }
        Command::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password("Password: ").map_err(CliError::Password)?,
            };
            let envelope = client.login(&LoginDto { email, password }).await;
            if !envelope.success {
                return Err(CliError::Rejected(envelope.message_or("Login failed").to_string()));
            }
            eprintln!("✓ {}", envelope.message_or("Logged in"));
            if let Some(path) = client.storage().take_redirect_after_login().await? {
                navigator.push(&path);
            }
            Ok(())
        }
        Command::Register { user_name, email } => {
            let password = rpassword::prompt_password("Password: ").map_err(CliError::Password)?;
            let envelope = client
                .register(&RegisterDto {
                    user_name,
                    email,
                    password,
                })
                .await;
            if !envelope.success {
                return Err(CliError::Rejected(envelope.message_or("Registration failed").to_string()));
            }
            eprintln!("✓ {}", envelope.message_or("Registered"));
            Ok(())
        }
        Command::Logout => {
            client.logout().await?;
            eprintln!("✓ Logged out");
            Ok(())
        }
    }
}

fn services(client: &AdminClient, navigator: Arc<dyn Navigator>, assume_yes: bool) -> PageServices {
    PageServices {
        data: Arc::new(client.clone()),
        notifier: Arc::new(TerminalNotifier),
        confirmer: Arc::new(StdinConfirmer { assume_yes }),
        navigator,
    }
}
