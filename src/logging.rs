use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があればそれに従い、無い（または読めない）ときは INFO 以上を stderr に出す
pub fn init() {
    let spec = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(spec.as_deref()))
        .init();
}

fn build_filter(spec: Option<&str>) -> EnvFilter {
    spec.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
