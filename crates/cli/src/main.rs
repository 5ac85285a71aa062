#![forbid(unsafe_code)]

mod render;

use ck_storage::{CustomerInsertRequest, SqliteStore, StoreConfig, StoreError};
use std::path::PathBuf;

const EXIT_STORAGE: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn usage() -> &'static str {
    "ck — customer record keeper over a single-file SQLite store\n\n\
USAGE:\n\
  ck init [--storage-dir DIR]\n\
  ck add --name NAME [--birthday YYYY-MM-DD] [--email EMAIL]\n\
         [--phone PHONE] [--address ADDRESS] [--contact CHANNEL]\n\
         [--storage-dir DIR]\n\
  ck seed [--storage-dir DIR]\n\
  ck list [--json] [--storage-dir DIR]\n\n\
NOTES:\n\
  - DIR defaults to the current directory; the store file is `customers.db`.\n\
  - CHANNEL is one of: email, phone, mail, other.\n\
  - `seed` initializes the store and inserts two sample customers.\n\
  - `list` opens the store read-only and prints every record.\n"
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Help,
    Init {
        storage_dir: PathBuf,
    },
    Add {
        storage_dir: PathBuf,
        request: CliInsert,
    },
    Seed {
        storage_dir: PathBuf,
    },
    List {
        storage_dir: PathBuf,
        json: bool,
    },
}

// CustomerInsertRequest sans Eq, so Command can stay comparable in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct CliInsert {
    name: Option<String>,
    birthday: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    contact: Option<String>,
}

impl CliInsert {
    fn into_request(self) -> Result<CustomerInsertRequest, String> {
        let Some(name) = self.name else {
            return Err("`ck add` requires --name".to_string());
        };
        Ok(CustomerInsertRequest {
            name,
            birthday: self.birthday,
            email: self.email,
            phone_number: self.phone,
            address: self.address,
            preferred_contact: self.contact,
        })
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(Command::Help);
    }
    let Some((subcommand, rest)) = args.split_first() else {
        return Err("missing subcommand".to_string());
    };

    let mut storage_dir = PathBuf::from(".");
    let mut json = false;
    let mut insert = CliInsert::default();

    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        let mut value_for = |flag: &str| -> Result<String, String> {
            iter.next()
                .map(|value| value.to_string())
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match flag.as_str() {
            "--storage-dir" => storage_dir = PathBuf::from(value_for("--storage-dir")?),
            "--json" if subcommand == "list" => json = true,
            "--name" if subcommand == "add" => insert.name = Some(value_for("--name")?),
            "--birthday" if subcommand == "add" => {
                insert.birthday = Some(value_for("--birthday")?)
            }
            "--email" if subcommand == "add" => insert.email = Some(value_for("--email")?),
            "--phone" if subcommand == "add" => insert.phone = Some(value_for("--phone")?),
            "--address" if subcommand == "add" => insert.address = Some(value_for("--address")?),
            "--contact" if subcommand == "add" => insert.contact = Some(value_for("--contact")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    match subcommand.as_str() {
        "init" => Ok(Command::Init { storage_dir }),
        "add" => Ok(Command::Add {
            storage_dir,
            request: insert,
        }),
        "seed" => Ok(Command::Seed { storage_dir }),
        "list" => Ok(Command::List { storage_dir, json }),
        other => Err(format!("unknown subcommand: {other}")),
    }
}

fn sample_customers() -> Vec<CustomerInsertRequest> {
    vec![
        CustomerInsertRequest {
            name: "Alice Wonderland".to_string(),
            birthday: Some("1990-05-15".to_string()),
            email: Some("alice@example.com".to_string()),
            phone_number: Some("555-123-4567".to_string()),
            address: Some("10 Tea Party Lane, Fantasyland".to_string()),
            preferred_contact: Some("email".to_string()),
        },
        CustomerInsertRequest {
            name: "Bob The Builder".to_string(),
            birthday: Some("1975-12-01".to_string()),
            email: Some("bob@buildit.com".to_string()),
            phone_number: Some("555-987-6543".to_string()),
            address: Some("20 Tool Box Road, Fixit City".to_string()),
            preferred_contact: Some("phone".to_string()),
        },
    ]
}

fn run(command: Command) -> Result<(), StoreError> {
    match command {
        Command::Help => {
            println!("{}", usage());
            Ok(())
        }
        Command::Init { storage_dir } => {
            let config = StoreConfig::new(storage_dir);
            SqliteStore::open(&config)?;
            println!("customer store ready at {}", config.db_path().display());
            Ok(())
        }
        Command::Add {
            storage_dir,
            request,
        } => {
            let request = match request.into_request() {
                Ok(request) => request,
                Err(message) => {
                    // Missing --name is a usage error, same exit path as a
                    // malformed flag.
                    eprintln!("{message}\n\n{}", usage());
                    std::process::exit(EXIT_USAGE);
                }
            };
            let config = StoreConfig::new(storage_dir);
            let mut store = SqliteStore::open(&config)?;
            let id = store.insert(request)?;
            println!("inserted customer id={id}");
            Ok(())
        }
        Command::Seed { storage_dir } => {
            let config = StoreConfig::new(storage_dir);
            let mut store = SqliteStore::open(&config)?;
            println!("customer store ready at {}", config.db_path().display());

            // One failed insert is reported and must not abort the rest.
            for request in sample_customers() {
                let name = request.name.clone();
                match store.insert(request) {
                    Ok(id) => println!("inserted customer id={id} name={name}"),
                    Err(err) => eprintln!("insert failed for {name}: {err}"),
                }
            }

            let rows = store.list_all()?;
            print!("{}", render::render_table(&rows));
            Ok(())
        }
        Command::List { storage_dir, json } => {
            let config = StoreConfig::new(storage_dir);
            let store = SqliteStore::open_read_only(&config)?;
            let rows = store.list_all()?;
            if json {
                println!("{}", render::render_json(&rows));
            } else {
                print!("{}", render::render_table(&rows));
            }
            Ok(())
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", usage());
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = run(command) {
        eprintln!("error: {err}");
        let code = if err.is_validation() {
            EXIT_USAGE
        } else {
            EXIT_STORAGE
        };
        std::process::exit(code);
    }
}
