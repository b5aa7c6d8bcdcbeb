use std::env;

use jenkinsflow::db;
use jenkinsflow::jobs::JobsRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "jflowctl <command>\n\
             Commands:\n\
             - show\n\
             - counts\n\
             - get <name>\n\
             - reset\n\
             \n\
             Uses JFLOW_DATABASE_PATH or DATABASE_PATH (default jenkinsflow.db).\n"
        );
        std::process::exit(2);
    }

    let path = env::var("JFLOW_DATABASE_PATH")
        .or_else(|_| env::var("DATABASE_PATH"))
        .unwrap_or_else(|_| "jenkinsflow.db".to_string());

    let pool = db::make_pool(&path).await?;
    db::run_migrations(&pool).await?;
    let repo = JobsRepo::new(pool.clone());

    match args[1].as_str() {
        "show" => show(&repo).await?,
        "counts" => counts(&repo).await?,
        "get" => {
            let name = args.get(2).expect("usage: jflowctl get <name>");
            get(&repo, name).await?;
        }
        "reset" => {
            let removed = repo.delete_all().await?;
            println!("reset OK ({removed} rows removed)");
        }
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(2);
        }
    }

    pool.close().await;
    Ok(())
}

async fn show(repo: &JobsRepo) -> anyhow::Result<()> {
    let jobs = repo.list_jobs().await?;
    for job in &jobs {
        println!(
            "{} | {} | {}",
            job.name,
            job.status.as_deref().unwrap_or("-"),
            job.last_updated
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    println!("{} rows", jobs.len());
    Ok(())
}

async fn counts(repo: &JobsRepo) -> anyhow::Result<()> {
    let mut total = 0;
    for (status, count) in repo.counts_by_status().await? {
        println!("{}={count}", status.as_deref().unwrap_or("-"));
        total += count;
    }
    println!("total={total}");
    Ok(())
}

async fn get(repo: &JobsRepo, name: &str) -> anyhow::Result<()> {
    match repo.get_job(name).await? {
        Some(job) => println!(
            "name={} status={} last_updated={}",
            job.name,
            job.status.as_deref().unwrap_or("-"),
            job.last_updated
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string()),
        ),
        None => println!("no job named '{name}'"),
    }
    Ok(())
}
