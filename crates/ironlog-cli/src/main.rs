use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use ironlog_cli::seeder::{self, DemoConfig};
use ironlog_db::PgPool;

#[derive(Parser)]
#[command(name = "ironlog-cli")]
#[command(about = "Ironlog CLI - Administrative tools for Ironlog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a new administrator account
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the default admin (admin@workout.com) and the sample exercise catalog
    Seed,
    /// Seed fake users with workouts
    SeedDemo {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of workouts per user
        #[arg(short = 'w', long, default_value = "5")]
        workouts: usize,
    },
    /// Delete demo users and everything they logged
    ClearDemo,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match ironlog_db::init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateAdmin { email, password } => {
            handle_create_admin(&pool, email, password).await
        }
        Commands::Seed => handle_seed(&pool).await,
        Commands::SeedDemo { users, workouts } => handle_seed_demo(&pool, users, workouts).await,
        Commands::ClearDemo => handle_clear_demo(&pool).await,
    }
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, error);
    std::process::exit(1);
}

async fn handle_migrate(pool: &PgPool) {
    match ironlog_db::run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => fail("Error running migrations", e),
    }
}

async fn handle_create_admin(pool: &PgPool, email: Option<String>, password: Option<String>) {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .unwrap_or_else(|e| fail("Failed to read email", e)),
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .unwrap_or_else(|e| fail("Failed to read password", e)),
    };

    match seeder::create_admin(pool, &email, &password).await {
        Ok(id) => {
            println!("\n✅ Admin created successfully!");
            println!("   Email: {}", email.trim().to_lowercase());
            println!("   Id: {}", id);
        }
        Err(e) => fail("Error creating admin", e),
    }
}

async fn handle_seed(pool: &PgPool) {
    if let Err(e) = seeder::seed_defaults(pool).await {
        fail("Error seeding database", e);
    }
}

async fn handle_seed_demo(pool: &PgPool, users: usize, workouts: usize) {
    let config = DemoConfig::new(users).with_workouts(workouts);
    if let Err(e) = seeder::seed_demo(pool, config).await {
        fail("Error seeding demo data", e);
    }
}

async fn handle_clear_demo(pool: &PgPool) {
    match seeder::clear_demo(pool).await {
        Ok(deleted) => println!("✅ Cleared {} demo users", deleted),
        Err(e) => fail("Error clearing demo data", e),
    }
}
