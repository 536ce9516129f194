//! Phase 3 tests: script driver, datasets, configuration.

use std::fs;
use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use pathgraph::cli::{run_script, ScriptDriver};
use pathgraph::config::{DriverConfig, ScriptMode};
use pathgraph::dataset::{hero_graph_from_reader, load_hero_graph, CampusMap};
use pathgraph::types::{GraphError, Point};

const HEROES: &str = "hero\tbook\n\
    Ernst\tCSE331\n\
    Notkin\tCSE331\n\
    Notkin\tCSE403\n\
    Perkins\tCSE331\n\
    Ernst\tCSE403\n\
    Mary Jane\tSpider Tales\n\
    Notkin\tSpider Tales\n\
    Loner\tSolo\n";

const BUILDINGS: &str = "shortName\tlongName\tx\ty\n\
    CSE\tPaul G. Allen Center\t0\t0\n\
    MGH\tMary Gates Hall\t30\t40\n\
    ODE\tOdegaard Library\t100\t100\n\
    FAR\tFar Away Annex\t500\t500\n";

const PATHS: &str = "x1\ty1\tx2\ty2\tdistance\n\
    0\t0\t30\t40\t50\n\
    30\t40\t0\t0\t50\n\
    30\t40\t100\t100\t92.195\n\
    0\t0\t100\t100\t150\n";

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Labeled Script Tests ====================

#[test]
fn test_labeled_script_transcript() {
    let script = "\
# Simple graph
CreateGraph g
AddNode g n1
AddNode g n2
AddEdge g n1 n2 e1
AddEdge g n1 n2 e2
AddEdge g n2 n2 loop
ListNodes g
ListChildren g n1
ListChildren g n2
";
    let out = run_script(script, ScriptMode::Labeled).unwrap();
    assert_eq!(
        lines(&out),
        vec![
            "# Simple graph",
            "created graph g",
            "added node n1 to g",
            "added node n2 to g",
            "added edge e1 from n1 to n2 in g",
            "added edge e2 from n1 to n2 in g",
            "added edge loop from n2 to n2 in g",
            "g contains: n1 n2",
            "the children of n1 in g are: n2(e1) n2(e2)",
            "the children of n2 in g are: n2(loop)",
        ]
    );
}

#[test]
fn test_empty_listings_have_no_trailing_items() {
    let out = run_script("CreateGraph g\nListNodes g\nListChildren g nobody\n", ScriptMode::Labeled)
        .unwrap();
    assert_eq!(
        lines(&out),
        vec![
            "created graph g",
            "g contains:",
            "the children of nobody in g are:"
        ]
    );
}

#[test]
fn test_labeled_find_path() {
    let script = "\
CreateGraph g
AddNode g a
AddNode g b
AddNode g c
AddNode g island
AddEdge g a b ab
AddEdge g b c bc
FindPath g a c
FindPath g a a
FindPath g a island
FindPath g a ghost
";
    let out = run_script(script, ScriptMode::Labeled).unwrap();
    let out = lines(&out);
    assert_eq!(
        &out[7..],
        &[
            "path from a to c:",
            "a to b via ab",
            "b to c via bc",
            "path from a to a:",
            "path from a to island:",
            "no path found",
            "unknown character ghost",
        ]
    );
}

#[test]
fn test_script_errors_are_reported_inline() {
    let script = "\
AddNode missing a
CreateGraph g
AddEdge g a b
AddEdge g a b e
Teleport g
ListNodes g
";
    let out = run_script(script, ScriptMode::Labeled).unwrap();
    assert_eq!(
        lines(&out),
        vec![
            "Exception: unknown graph: missing",
            "created graph g",
            "Exception: Bad arguments to AddEdge: [g, a, b]",
            "Exception: unknown node: a",
            "Unrecognized command: Teleport",
            "g contains:",
        ]
    );
}

// ==================== Weighted Script Tests ====================

#[test]
fn test_weighted_script_transcript() {
    let script = "\
CreateGraph m
AddNode m a
AddNode m b
AddNode m c
AddNode m d
AddEdge m a b 10
AddEdge m a c 1
AddEdge m c d 1
AddEdge m d b 1
ListChildren m a
FindPath m a b
FindPath m b b
";
    let out = run_script(script, ScriptMode::Weighted).unwrap();
    let out = lines(&out);
    assert_eq!(out[5], "added edge 10.000 from a to b in m");
    assert_eq!(out[9], "the children of a in m are: b(10.000) c(1.000)");
    assert_eq!(
        &out[10..],
        &[
            "path from a to b:",
            "a to c with weight 1.000",
            "c to d with weight 1.000",
            "d to b with weight 1.000",
            "total cost: 3.000",
            "path from b to b:",
            "total cost: 0.000",
        ]
    );
}

#[test]
fn test_weighted_edges_are_bidirectional_and_unique() {
    let script = "\
CreateGraph m
AddNode m a
AddNode m b
AddEdge m a b 2
AddEdge m a b 2
ListChildren m b
";
    let out = run_script(script, ScriptMode::Weighted).unwrap();
    assert_eq!(
        lines(&out).last(),
        Some(&"the children of b in m are: a(2.000) a(2.000)")
    );
}

#[test]
fn test_weighted_rejects_bad_costs_and_load_graph() {
    let script = "\
CreateGraph m
AddNode m a
AddNode m b
AddNode m c
AddEdge m a b heavy
AddEdge m a b -1
LoadGraph m heroes.tsv
FindPath m a c
";
    let out = run_script(script, ScriptMode::Weighted).unwrap();
    let out = lines(&out);
    assert!(out[4].starts_with("Exception: invalid argument"));
    assert!(out[5].starts_with("Exception: cost must be finite"));
    assert_eq!(out[6], "Unrecognized command: LoadGraph");
    assert_eq!(&out[7..], &["path from a to c:", "no path found"]);
}

// ==================== LoadGraph Tests ====================

#[test]
fn test_load_graph_from_data_dir() {
    init_logging();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.tsv"), HEROES).unwrap();

    let script = "\
LoadGraph staff staff.tsv
ListChildren staff Ernst
FindPath staff Perkins Mary_Jane
LoadGraph other missing.tsv
";
    let mut driver = ScriptDriver::new(script.as_bytes(), Vec::new(), ScriptMode::Labeled)
        .with_data_dir(dir.path());
    driver.run().unwrap();
    let out = String::from_utf8(driver.into_output()).unwrap();
    let out = lines(&out);

    assert_eq!(out[0], "loaded graph staff");
    assert_eq!(
        out[1],
        "the children of Ernst in staff are: Notkin(CSE331) Notkin(CSE403) Perkins(CSE331)"
    );
    // Notkin is queued straight from Perkins, so Ernst is not on the route.
    assert_eq!(
        &out[2..5],
        &[
            "path from Perkins to Mary Jane:",
            "Perkins to Notkin via CSE331",
            "Notkin to Mary Jane via Spider Tales",
        ]
    );
    assert!(out[5].starts_with("Exception: IO error"));
}

#[test]
fn test_driver_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("h.tsv"), HEROES).unwrap();
    let config = DriverConfig {
        data_dir: dir.path().to_path_buf(),
        mode: ScriptMode::Labeled,
        banner: false,
    };

    let script = "LoadGraph h h.tsv\nFindPath h Loner Ernst\n";
    let mut driver = ScriptDriver::from_config(script.as_bytes(), Vec::new(), &config);
    driver.run().unwrap();
    let out = String::from_utf8(driver.into_output()).unwrap();
    assert_eq!(
        lines(&out),
        vec!["loaded graph h", "path from Loner to Ernst:", "no path found"]
    );
}

#[test]
fn test_load_graph_bad_arguments() {
    let out = run_script("LoadGraph staff\n", ScriptMode::Labeled).unwrap();
    assert_eq!(
        lines(&out),
        vec!["Exception: Bad arguments to graphFromData: [staff]"]
    );
}

// ==================== Dataset Tests ====================

#[test]
fn test_hero_dataset() {
    init_logging();
    let file = write_file(HEROES);
    let graph = load_hero_graph(file.path()).unwrap();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(
        graph.list_children(&"Mary Jane".to_string()),
        vec!["Notkin(Spider Tales)"]
    );
    assert!(graph.list_children(&"Loner".to_string()).is_empty());
    assert!(graph.is_consistent());
}

#[test]
fn test_hero_dataset_skips_incomplete_rows() {
    let data = "hero\tbook\nA\tB1\n\tB1\nB\t\nC\tB1\n";
    let graph = hero_graph_from_reader(data.as_bytes()).unwrap();
    assert_eq!(graph.list_node_labels(), vec!["A", "C"]);
}

#[test]
fn test_hero_dataset_malformed() {
    let data = "hero\tbook\nA\tB1\textra\n";
    assert!(matches!(
        hero_graph_from_reader(data.as_bytes()),
        Err(GraphError::Dataset(_))
    ));
    let missing = tempdir().unwrap().path().join("nope.tsv");
    assert!(matches!(load_hero_graph(&missing), Err(GraphError::Io(_))));
}

#[test]
fn test_campus_route() {
    init_logging();
    let buildings = write_file(BUILDINGS);
    let paths = write_file(PATHS);
    let map = CampusMap::load(buildings.path(), paths.path()).unwrap();

    assert!(map.short_name_exists("MGH"));
    assert!(!map.short_name_exists("XYZ"));
    assert_eq!(map.long_name_for_short("ODE"), Some("Odegaard Library"));
    assert_eq!(map.building_names().len(), 4);

    let path = map.find_shortest_path("CSE", "ODE").unwrap();
    let stops: Vec<Point> = path.segments().map(|seg| *seg.end()).collect();
    assert_eq!(stops, vec![Point::new(30.0, 40.0), Point::new(100.0, 100.0)]);
    assert!((path.cost() - 142.195).abs() < 1e-9);

    // Paths are one-way.
    let back = map.find_shortest_path("ODE", "CSE").unwrap();
    assert!(back.is_empty());

    let far = map.find_shortest_path("CSE", "FAR").unwrap();
    assert!(far.is_empty());
    assert_eq!(*far.end(), Point::new(0.0, 0.0));
}

#[test]
fn test_campus_unknown_building() {
    let map = CampusMap::from_readers(BUILDINGS.as_bytes(), PATHS.as_bytes()).unwrap();
    match map.find_shortest_path("CSE", "XYZ") {
        Err(GraphError::UnknownBuilding(name)) => assert_eq!(name, "XYZ"),
        other => panic!("Expected UnknownBuilding error, got {:?}", other),
    }
}

#[test]
fn test_campus_shared_point_is_not_unreachable() {
    let buildings = "shortName\tlongName\tx\ty\n\
        AAA\tNorth Entrance\t0\t0\n\
        AAB\tNorth Annex\t0\t0\n\
        FAR\tFar Away Annex\t9\t9\n";
    let paths = "x1\ty1\tx2\ty2\tdistance\n0\t0\t1\t1\t1.5\n";
    let map = CampusMap::from_readers(buildings.as_bytes(), paths.as_bytes()).unwrap();

    let same = map.find_route("AAA", "AAB").unwrap().unwrap();
    assert!(same.is_empty());
    assert_eq!(same.cost(), 0.0);
    assert_eq!(*same.end(), Point::new(0.0, 0.0));

    assert!(map.find_route("AAA", "FAR").unwrap().is_none());
    // The unchecked query cannot tell these apart.
    assert_eq!(
        map.find_shortest_path("AAA", "FAR").unwrap(),
        map.find_shortest_path("AAA", "AAB").unwrap()
    );
}

#[test]
fn test_campus_building_lookup() {
    let map = CampusMap::from_readers(BUILDINGS.as_bytes(), PATHS.as_bytes()).unwrap();
    let mgh = map.building("MGH").unwrap();
    assert_eq!(mgh.long_name, "Mary Gates Hall");
    assert_eq!(mgh.point(), Point::new(30.0, 40.0));
    assert!(map.building("XYZ").is_none());
    assert_eq!(map.long_name_for_short("XYZ"), None);
}

#[test]
fn test_campus_negative_distance_rejected() {
    let paths = "x1\ty1\tx2\ty2\tdistance\n0\t0\t1\t1\t-4\n";
    assert!(matches!(
        CampusMap::from_readers(BUILDINGS.as_bytes(), paths.as_bytes()),
        Err(GraphError::InvalidCost(_))
    ));
}

// ==================== Config Tests ====================

#[test]
fn test_config_file_roundtrip() {
    init_logging();
    let file = write_file("data_dir = \"/srv/graphs\"\nmode = \"weighted\"\nbanner = false\n");
    let config = DriverConfig::load(file.path()).unwrap();
    assert_eq!(config.data_dir, std::path::PathBuf::from("/srv/graphs"));
    assert_eq!(config.mode, ScriptMode::Weighted);
    assert!(!config.banner);

    let explicit = DriverConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(explicit, config);
}

#[test]
fn test_config_errors() {
    let bad = write_file("mode = \"sideways\"\n");
    assert!(matches!(
        DriverConfig::load(bad.path()),
        Err(GraphError::Config(_))
    ));

    let missing = tempdir().unwrap().path().join("absent.toml");
    assert!(matches!(
        DriverConfig::load(&missing),
        Err(GraphError::Io(_))
    ));
}
