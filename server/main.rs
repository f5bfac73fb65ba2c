use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{middleware, App, HttpServer};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "./dist";

fn port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn static_dir_from_env() -> PathBuf {
    env::var("STATIC_DIR")
        .map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let port = port_from_env();
    let static_dir = static_dir_from_env();
    log::info!("Serving {} on 0.0.0.0:{port}", static_dir.display());

    HttpServer::new(move || {
        let index = static_dir.join("index.html");
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    // Client-side routes such as /schedule resolve to the app shell
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
