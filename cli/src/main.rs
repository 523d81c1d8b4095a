mod terminal;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pizza_core::{
    config::{BASE_URL_ENV, DEFAULT_BASE_URL},
    ClientConfig, Deletion, NewPizzaForm, Pizza, PizzaService, Topping, UreqTransport,
};
use tracing_subscriber::EnvFilter;

use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(about = "Manage the pizza menu")]
struct Cli {
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the menu.
    List,
    /// Create a pizza.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "topping")]
        toppings: Vec<i64>,
    },
    /// Delete a pizza after confirmation.
    Delete {
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
    /// Change a pizza's name and/or toppings.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        /// Replaces the whole topping set when given at least once.
        #[arg(long = "topping")]
        toppings: Vec<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = PizzaService::from_config(&ClientConfig::new(&cli.base_url), UreqTransport::new());
    let mut menu: Vec<Pizza> = Vec::new();
    service
        .fetch_pizzas(&mut menu)
        .with_context(|| format!("fetching menu from {}", cli.base_url))?;

    match cli.command {
        Command::List => print_menu(&menu),
        Command::Add { name, toppings } => {
            let mut form = NewPizzaForm::new(&name, toppings);
            let created = service.add_pizza(&mut form, &mut menu)?;
            println!("created pizza id={}", created.id);
        }
        Command::Delete { id, yes } => {
            let ui = Terminal { assume_yes: yes };
            match service.delete_pizza(id, &mut menu, &ui) {
                Ok(Deletion::Deleted) => println!("deleted pizza id={id}"),
                Ok(Deletion::Declined) => println!("kept pizza id={id}"),
                Err(_) => std::process::exit(1),
            }
        }
        Command::Edit { id, name, toppings } => {
            let Some(pizza) = menu.iter().find(|p| p.id == id).cloned() else {
                bail!("no pizza with id {id} on the menu");
            };
            let name = name.unwrap_or_else(|| pizza.name.clone());
            let toppings = if toppings.is_empty() {
                pizza.toppings.clone()
            } else {
                known_toppings(&menu, &toppings)
            };

            let ui = Terminal { assume_yes: true };
            let mut saved = false;
            if service
                .save_edit(&pizza, &name, &toppings, &mut menu, &ui, || saved = true)
                .is_err()
            {
                std::process::exit(1);
            }
            if saved {
                print_menu(&menu);
            }
        }
    }

    Ok(())
}

/// Build toppings for `ids`, borrowing names from toppings already on the menu.
fn known_toppings(menu: &[Pizza], ids: &[i64]) -> Vec<Topping> {
    ids.iter()
        .map(|&id| {
            menu.iter()
                .flat_map(|p| p.toppings.iter())
                .find(|t| t.id == id)
                .cloned()
                .unwrap_or_else(|| Topping {
                    id,
                    name: format!("#{id}"),
                })
        })
        .collect()
}

fn print_menu(menu: &[Pizza]) {
    if menu.is_empty() {
        println!("(menu is empty)");
    }
    for pizza in menu {
        let toppings: Vec<&str> = pizza.toppings.iter().map(|t| t.name.as_str()).collect();
        println!("{:>4}  {}  [{}]", pizza.id, pizza.name, toppings.join(", "));
    }
}
