use dotenv::dotenv;
use planting_guide::configuration::get_configuration;
use planting_guide::startup::Application;
use planting_guide::telemetry::init_subscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_subscriber("planting_guide=info,actix_web=info,warn")?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
