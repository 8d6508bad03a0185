use std::env;
use std::path::Path;
use std::process::exit;

use productid::common::{PRODUCT_CERT_DIR, PRODUCT_DB_FILE};
use productid::product_db::ProductDb;
use productid::reconciler::orphaned_certificates;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let db_path = if args.len() > 1 { args[1].as_str() } else { PRODUCT_DB_FILE };
    let cert_dir = if args.len() > 2 { args[2].as_str() } else { PRODUCT_CERT_DIR };

    let db = match ProductDb::load(db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Unable to read product database {}: {}", db_path, e);
            exit(1);
        }
    };
    print!("{}", db);

    let orphans = orphaned_certificates(&db, Path::new(cert_dir));
    if orphans.is_empty() {
        println!("No orphaned certificates in {}", cert_dir);
    } else {
        println!("Orphaned certificates in {}:", cert_dir);
        for path in orphans {
            println!("\t{}", path.display());
        }
    }
}
