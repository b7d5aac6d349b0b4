//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use flate2::read::GzDecoder;
use tempfile::TempDir;

/// One edge, two nodes, no properties.
pub const SIMPLE_GRAPHML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <graph id="G" edgedefault="directed">
    <node id="n1"/>
    <node id="n2"/>
    <edge id="e1" source="n1" target="n2"/>
  </graph>
</graphml>
"#;

/// Same graph as [`SIMPLE_GRAPHML`].
pub const SIMPLE_YARSPG: &str =
    "{e: [{id: e1, s: n1, t: n2}], n: [{id: n1, d: []}, {id: n2, d: []}]}\n";

/// Three edges, four nodes with zero to four data children each.
pub const PEOPLE_GRAPHML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="name" attr.type="string"/>
  <key id="d1" for="node" attr.name="age" attr.type="int"/>
  <key id="d2" for="node" attr.name="city" attr.type="string"/>
  <graph id="people" edgedefault="directed">
    <node id="alice">
      <data key="d0">Alice</data>
      <data key="d1">34</data>
      <data key="d2">Gdansk</data>
    </node>
    <node id="bob">
      <data key="d0">Bob</data>
    </node>
    <node id="carol">
      <data key="d0">Carol</data>
      <data key="d1">29</data>
      <data key="d2">Lodz</data>
      <data key="d3">extra</data>
    </node>
    <node id="dave"/>
    <edge id="knows1" source="alice" target="bob"/>
    <edge id="knows2" source="bob" target="carol"/>
    <edge id="knows3" source="carol" target="dave"/>
  </graph>
</graphml>
"#;

/// A scratch directory holding input files and receiving output files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the workspace.
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Decompresses the gzip file `name` inside the workspace.
    pub fn read_gz(&self, name: &str) -> Result<String> {
        let file = std::fs::File::open(self.dir.path().join(name))?;
        let mut text = String::new();
        GzDecoder::new(file).read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Number of N-Triples lines typing a subject as `pgo:<class>`.
pub fn count_typed(ntriples: &str, class: &str) -> usize {
    let suffix = format!(
        "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ii.uwb.edu.pl/pgo/{class}> ."
    );
    ntriples.lines().filter(|line| line.ends_with(&suffix)).count()
}
