use strata::PersistentSegmentTree;
use strata::Version;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tree = PersistentSegmentTree::build(&[1i64, 2, 3, 4]);
    let v0 = Version::INITIAL;
    log::info!("built {} from [1, 2, 3, 4]", v0);

    let v1 = tree.update(v0, 1, 5).expect("index 1 is in bounds");
    log::info!("set index 1 to 5 on {}: published {}", v0, v1);

    let v2 = tree.update(v1, 3, 0).expect("index 3 is in bounds");
    log::info!("set index 3 to 0 on {}: published {}", v1, v2);

    for version in [v0, v1, v2] {
        log::info!(
            "{}: {:?} sum={} [1, 2]={}",
            version,
            tree.to_vec(version).expect("published version"),
            tree.query(version, 0, 3).expect("published version"),
            tree.query(version, 1, 2).expect("published version"),
        );
    }

    log::info!(
        "versions: {}, depth: {}, nodes added by {}: {}",
        tree.version_count(),
        tree.depth(),
        v1,
        tree.fresh_nodes(v0, v1).expect("published versions"),
    );
}
