//! Alias table walkthrough
//!
//! Shows how qualifier rewriting changes emitted type names.
//!
//! Run with: cargo run -p snaplit --example aliases

use snaplit::{AliasTable, Snap};

pub mod models {
    use snaplit::Snap;

    #[derive(Snap)]
    pub struct User {
        pub name: String,
        pub admin: bool,
    }
}

fn main() {
    let user = models::User {
        name: "ada".to_string(),
        admin: true,
    };

    // As-is: fully qualified.
    println!("{}", snaplit::to_string(&user, &AliasTable::new()));
    println!();

    // Shorten the qualifier.
    let shortened = AliasTable::new().alias(module_path!(), "app");
    println!("{}", snaplit::to_string(&user, &shortened));
    println!();

    // Strip it entirely, separator included.
    let stripped = AliasTable::new().strip(format!("{}::models", module_path!()));
    println!("{}", snaplit::to_string(&user, &stripped));
}
