use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use noteful::database::{
    self,
    models::{folders, notes},
    schema::create_schema,
    DB,
};
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
/// Administration utility for the Noteful database.
/// Reads DATABASE_URL from the environment (or .env).
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Database maintenance commands.
    Db {
        #[command(subcommand)]
        db_command: DbCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Creates the `folders` and `notes` tables if they do not exist yet.
    Init,
    /// Inserts sample folders and notes.
    Seed,
    /// Deletes every note and folder. Use with care!
    Wipe {
        /// Skip the confirmation guard.
        #[arg(long)]
        yes: bool,
    },
    /// Prints every row of a table as JSON.
    List {
        #[arg(short, long, value_enum)]
        table: Table,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Table {
    Folders,
    Notes,
}

const SAMPLE_FOLDERS: [&str; 3] = ["Important", "Super", "Spangley"];

// (name, modified, folder index into SAMPLE_FOLDERS, content)
const SAMPLE_NOTES: [(&str, &str, usize, &str); 4] = [
    ("Dogs", "2019-01-03T00:00:00.000Z", 0, "Corporis accusamus placeat quas non voluptas."),
    ("Cats", "2018-08-15T23:00:00.000Z", 1, "Eos laudantium quia ab blanditiis temporibus necessitatibus."),
    ("Pigs", "2018-03-01T00:00:00.000Z", 2, "Occaecati dignissimos quam qui facere deserunt quia."),
    ("Birds", "2019-01-04T00:00:00.000Z", 0, "Eum molestiae explicabo et earum quo."),
];

async fn seed(db: &DB) -> Result<(), Box<dyn std::error::Error>> {
    let mut folder_ids = Vec::with_capacity(SAMPLE_FOLDERS.len());
    for name in SAMPLE_FOLDERS {
        let result = folders::Entity::insert(folders::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        })
        .exec(db)
        .await?;
        folder_ids.push(result.last_insert_id);
    }

    for (name, modified, folder_index, content) in SAMPLE_NOTES {
        let modified: DateTime<Utc> = modified.parse()?;
        notes::Entity::insert(notes::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            modified: Set(modified),
            folder_id: Set(folder_ids[folder_index]),
            content: Set(content.to_string()),
        })
        .exec(db)
        .await?;
    }

    println!(
        "Seeded {} folders and {} notes.",
        SAMPLE_FOLDERS.len(),
        SAMPLE_NOTES.len()
    );
    Ok(())
}

async fn wipe(db: &DB) -> Result<(), Box<dyn std::error::Error>> {
    // Notes first, they reference folders.
    let notes_removed = notes::Entity::delete_many().exec(db).await?.rows_affected;
    let folders_removed = folders::Entity::delete_many().exec(db).await?.rows_affected;
    println!(
        "Removed {} notes and {} folders.",
        notes_removed, folders_removed
    );
    Ok(())
}

async fn list(db: &DB, table: Table) -> Result<(), Box<dyn std::error::Error>> {
    let rows = match table {
        Table::Folders => serde_json::to_value(
            folders::Entity::find()
                .order_by_asc(folders::Column::Id)
                .all(db)
                .await?,
        )?,
        Table::Notes => serde_json::to_value(
            notes::Entity::find()
                .order_by_asc(notes::Column::Id)
                .all(db)
                .await?,
        )?,
    };
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let db = database::connect().await?;

    match cli.command {
        Commands::Db { db_command } => match db_command {
            DbCommand::Init => {
                create_schema(&db).await?;
                println!("Schema is ready.");
            }
            DbCommand::Seed => seed(&db).await?,
            DbCommand::Wipe { yes } => {
                if !yes {
                    return Err("Refusing to wipe without --yes".into());
                }
                wipe(&db).await?;
            }
            DbCommand::List { table } => list(&db, table).await?,
        },
    }

    Ok(())
}
