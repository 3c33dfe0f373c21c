pub mod advise;
pub mod list;
pub mod serve;

use spotgrid_topology::Topology;

/// Built-in topology, or the built-in table overlaid with a TOML file.
pub fn load_topology(path: Option<&str>) -> anyhow::Result<Topology> {
    Ok(match path {
        Some(p) => Topology::from_file(p)?,
        None => Topology::builtin(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_builtin_without_a_path() {
        let topo = load_topology(None).unwrap();
        assert!(topo.zones("us-central1").is_some());
    }

    #[test]
    fn loads_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[region]]\nname = \"lab-west1\"\nzones = [\"lab-west1-a\"]"
        )
        .unwrap();

        let topo = load_topology(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(topo.zones("lab-west1").unwrap(), &["lab-west1-a"]);
        // Built-ins survive the overlay.
        assert!(topo.zones("us-central1").is_some());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_topology(Some("/nonexistent/topology.toml")).is_err());
    }
}
