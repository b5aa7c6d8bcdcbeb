use anyhow::bail;
use chrono::Utc;

use jenkinsflow::config::Config;
use jenkinsflow::db;
use jenkinsflow::jenkins::JenkinsClient;
use jenkinsflow::jobs::{normalize, JobsRepo};

mod bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut cfg = Config::from_env()?;
    apply_cli_overrides(&mut cfg, &args)?;

    println!(
        "syncer starting... server={} username={} database={} dummy_jobs={}",
        cfg.server_url(),
        cfg.username.as_deref().unwrap_or("anonymous"),
        cfg.database_path,
        cfg.create_dummy_jobs,
    );

    println!("Connecting to {}", cfg.server_url());
    let client = JenkinsClient::new(
        &cfg.server_url(),
        cfg.username.clone(),
        cfg.password.clone(),
        cfg.http_timeout_secs,
    )?;
    client.verify_connection().await?;
    println!("Connected");

    if cfg.create_dummy_jobs {
        println!("Creating dummy jobs from {}", cfg.dummy_jobs_file);
        bootstrap::create_dummy_jobs(&client, &cfg.dummy_jobs_file).await?;
    }

    println!("Requesting job statuses");
    let remote = client.get_jobs().await?;
    println!("Fetched {} jobs", remote.len());

    let batch = normalize(&remote, Utc::now());
    if batch.skipped > 0 {
        eprintln!("skipped {} remote entries with no job name", batch.skipped);
    }

    println!("Saving to database {}", cfg.database_path);
    let pool = db::make_pool(&cfg.database_path).await?;
    db::run_migrations(&pool).await?;

    let repo = JobsRepo::new(pool.clone());
    let written = repo.upsert_batch(&batch.jobs).await?;
    println!("Upserted {written} rows");

    pool.close().await;
    println!("All done.");
    Ok(())
}

fn apply_cli_overrides(cfg: &mut Config, args: &[String]) -> anyhow::Result<()> {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--http-address" => cfg.http_address = take_value(args, &mut i)?,
            "--http-port" => {
                let raw = take_value(args, &mut i)?;
                cfg.http_port = match raw.parse() {
                    Ok(port) => port,
                    Err(_) => bail!("invalid --http-port value: {raw}"),
                };
            }
            "--username" => cfg.username = Some(take_value(args, &mut i)?),
            "--password" => cfg.password = Some(take_value(args, &mut i)?),
            "--database" => cfg.database_path = take_value(args, &mut i)?,
            "-d" | "--dummy" => cfg.create_dummy_jobs = true,
            other => bail!("unknown argument: {other} (try --help)"),
        }
        i += 1;
    }
    Ok(())
}

fn take_value(args: &[String], i: &mut usize) -> anyhow::Result<String> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.clone()),
        None => bail!("{flag} requires a value"),
    }
}

fn print_usage() {
    eprintln!(
        "syncer [options]\n\
         Performs one Jenkins status sync run and exits.\n\
         \n\
         Options:\n\
         --http-address <host>   Jenkins host (default localhost)\n\
         --http-port <port>      Jenkins port (default 8080)\n\
         --username <user>       Jenkins username\n\
         --password <pass>       Jenkins password or API token\n\
         --database <path>       SQLite file (default jenkinsflow.db)\n\
         -d, --dummy             Create dummy jobs on the server first\n\
         \n\
         Every option also reads its JFLOW_* environment variable;\n\
         command-line values win.\n"
    );
}
