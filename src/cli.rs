use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use crate::WISHLIST_PATH;
use crate::config::StorefrontConfig;
use crate::forms::browse::BrowseQuery;
use crate::forms::login::LoginForm;
use crate::repository::{FileStorage, LogNavigator, StaticCredentials};
use crate::domain::department::Department;
use crate::services::catalog::{BrowseState, find_product, load_department_page};
use crate::services::session::SessionGate;
use crate::services::wishlist::WishlistStore;
use crate::services::{ServiceError, ServiceResult};

#[derive(Parser)]
#[command(name = "f2h-storefront", version, about = "F2H storefront catalog and wishlist tool")]
pub struct Cli {
    /// Storage file, overrides STOREFRONT_STORAGE_PATH
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Print one page of a department as JSON
    Browse {
        #[arg(long, value_enum, default_value = "men")]
        department: DepartmentArg,
        /// Filter query string, e.g. `colors[0]=Red&rating=3&page=2`
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Inspect or change the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Log in with email and password
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log out and clear the wishlist
    Logout,
    /// Print where the entry page redirects
    Entry,
}

#[derive(Subcommand)]
pub enum WishlistAction {
    List,
    Add {
        id: i32,
        #[arg(long, value_enum, default_value = "men")]
        department: DepartmentArg,
    },
    Remove {
        id: i32,
    },
    Toggle {
        id: i32,
        #[arg(long, value_enum, default_value = "men")]
        department: DepartmentArg,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum DepartmentArg {
    Men,
    Women,
}

impl From<DepartmentArg> for Department {
    fn from(value: DepartmentArg) -> Self {
        match value {
            DepartmentArg::Men => Department::Men,
            DepartmentArg::Women => Department::Women,
        }
    }
}

/// Execute `cmd` against the configured storage and catalog, returning the text to print.
pub fn run(cmd: Cmd, config: &StorefrontConfig) -> ServiceResult<String> {
    let storage = FileStorage::new(&config.storage_path);

    match cmd {
        Cmd::Browse { department, query } => {
            let (filter, page) = BrowseQuery::parse(&query)
                .and_then(BrowseQuery::into_filter)
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            let mut state = BrowseState::new(filter);
            state.set_page(page);

            let catalog = config.catalog(department.into())?;
            let wishlist = WishlistStore::initialize(storage);
            let data =
                load_department_page(catalog.as_ref(), &wishlist, department.into(), &state)?;
            Ok(serde_json::to_string_pretty(&data)?)
        }
        Cmd::Wishlist { action } => {
            let mut wishlist = WishlistStore::initialize(storage);
            let output = match action {
                WishlistAction::List => {
                    json!({ "path": WISHLIST_PATH, "items": wishlist.list() })
                }
                WishlistAction::Add { id, department } => {
                    let catalog = config.catalog(department.into())?;
                    let product = find_product(catalog.as_ref(), id)?;
                    let added = wishlist.add(product)?;
                    json!({ "id": id, "added": added, "count": wishlist.len() })
                }
                WishlistAction::Remove { id } => {
                    let removed = wishlist.remove(id)?;
                    json!({ "id": id, "removed": removed, "count": wishlist.len() })
                }
                WishlistAction::Toggle { id, department } => {
                    let catalog = config.catalog(department.into())?;
                    let product = find_product(catalog.as_ref(), id)?;
                    let wishlisted = wishlist.toggle(product)?;
                    json!({ "id": id, "wishlisted": wishlisted, "count": wishlist.len() })
                }
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        Cmd::Login { email, password } => {
            let navigator = LogNavigator::new();
            let gate = SessionGate::new(storage, navigator.clone(), StaticCredentials::default());
            gate.login(LoginForm::new(email, password))?;
            Ok(navigator.current_path().unwrap_or_default())
        }
        Cmd::Logout => {
            let navigator = LogNavigator::new();
            let mut wishlist = WishlistStore::initialize(storage.clone());
            let gate = SessionGate::new(storage, navigator.clone(), StaticCredentials::default());
            gate.logout(&mut wishlist)?;
            Ok(navigator.current_path().unwrap_or_default())
        }
        Cmd::Entry => {
            let gate = SessionGate::new(storage, LogNavigator::new(), StaticCredentials::default());
            Ok(gate.resolve_entry()?.to_string())
        }
    }
}
