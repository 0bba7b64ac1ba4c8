use classdesk::config::database::init_db_pool;
use classdesk::logging::init_tracing;
use classdesk::middleware::role::UserRole;
use classdesk::modules;
use classdesk::modules::users::service::UserService;
use classdesk::router::init_router;
use classdesk::state::init_app_state;
use classdesk::utils::password::hash_password;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-admin" {
        return handle_create_admin(args).await;
    }

    // Normal server startup
    init_tracing();

    let state = init_app_state().await?;
    modules::ensure_schema(&state.db).await.map_err(|e| e.error)?;

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("🚀 Server running on http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_create_admin(args: Vec<String>) -> anyhow::Result<()> {
    if args.len() != 5 {
        eprintln!("Usage: {} create-admin <name> <email> <password>", args[0]);
        std::process::exit(1);
    }

    let name = &args[2];
    let email = &args[3];
    let password = &args[4];

    let db = init_db_pool().await?;
    UserService::ensure_schema(&db).await.map_err(|e| e.error)?;

    let hashed = hash_password(password).map_err(|e| e.error)?;

    match UserService::create(&db, name, email, &hashed, UserRole::Admin).await {
        Ok(user) => {
            println!("✅ Admin account created successfully!");
            println!("   Id: {}", user.id);
            println!("   Email: {}", user.email);
        }
        Err(e) => {
            eprintln!("❌ Error creating admin account: {}", e.error);
            std::process::exit(1);
        }
    }

    Ok(())
}
