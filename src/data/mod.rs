/// Data layer: records, loading, filtering and rasterization.
///
/// Architecture:
/// ```text
///  savedsolution.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record> (first four columns)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  roll == 1 → Vec<Coord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  raster   │  Vec<Coord> → OccupancyVolume (bounds checked)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod raster;
