use barnsense_core::sample_fleet;

pub fn run(host: &str, port: u16) {
    let fleet = sample_fleet();
    let base = format!("http://{host}:{port}");

    println!("\u{1F42E} barnsense server v{}", barnsense_core::VERSION);
    println!("   {base}");
    println!("   {} barns in the fleet", fleet.len());
    println!();
    println!("   Endpoints:");
    println!("     GET  /                      API index (try: curl {base})");
    println!("     GET  /barns                 List the fleet with safety bands");
    println!("     POST /barns                 Add a barn {{\"name\", \"target_temp\"}}");
    println!("     GET  /barns/{{id}}            Single barn by UUID or 1-based index");
    println!("     GET  /barns/{{id}}/heatmap    Computed 5x5x3 heat map");
    println!("     GET  /trend                 Weekly trend series");
    println!("     GET  /health                Fleet health check");
    println!();
    println!("   Query params for /barns/{{id}}/heatmap:");
    println!("     base=N     Override the base reading in ppm");
    println!("     seed=N     u64 seed for reproducible jitter");
    println!("     scene=true Include the renderable scene description");
    println!();
    println!("   Examples:");
    println!("     curl {base}/barns");
    println!("     curl {base}/barns/4/heatmap?seed=42");
    println!("     curl \"{base}/barns/1/heatmap?base=80&scene=true\"");
    println!();

    log::info!("starting server on {base}");
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    if let Err(e) = rt.block_on(barnsense_server::run_server_with(fleet, host, port)) {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
