use anyhow::Result;
use clap::Parser;
use plotters::prelude::*;
use response_graph::domain::ProximityGraph;
use response_graph::infrastructure::load_graph;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Render a proximity graph snapshot to PNG")]
struct Args {
    #[arg(short, long, help = "Graph snapshot from build-graph --output")]
    input: PathBuf,
    #[arg(short, long, default_value = "proximity_graph.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let graph = load_graph(&args.input)?;

    if graph.node_count() == 0 {
        println!("Graph has no nodes, nothing to draw");
        return Ok(());
    }

    draw_graph(&graph, &args.output)?;
    println!(
        "Rendered {} nodes and {} edges to {:?}",
        graph.node_count(),
        graph.edge_count(),
        args.output
    );
    Ok(())
}

fn category_color(category: Option<&str>) -> RGBColor {
    match category {
        Some("risk") => RED,
        Some("response") => GREEN,
        _ => BLUE,
    }
}

fn draw_graph(graph: &ProximityGraph, output_path: &PathBuf) -> Result<()> {
    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // Bounds over node coordinates, x = longitude, y = latitude.
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    for node in graph.nodes() {
        min_lng = min_lng.min(node.lng);
        max_lng = max_lng.max(node.lng);
        min_lat = min_lat.min(node.lat);
        max_lat = max_lat.max(node.lat);
    }

    let pad_lng = ((max_lng - min_lng) * 0.1).max(0.005);
    let pad_lat = ((max_lat - min_lat) * 0.1).max(0.005);
    min_lng -= pad_lng;
    max_lng += pad_lng;
    min_lat -= pad_lat;
    max_lat += pad_lat;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Proximity Graph ({} km, density {:.3})",
                graph.threshold_km,
                graph.density()
            ),
            ("sans-serif", 24),
        )
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min_lng..max_lng, min_lat..max_lat)?;

    chart.configure_mesh().x_desc("Longitude").y_desc("Latitude").draw()?;

    // Edges first so nodes draw on top.
    for edge in graph.edges() {
        let [(lat_a, lng_a), (lat_b, lng_b)] = edge.endpoints;
        chart.draw_series(LineSeries::new(
            vec![(lng_a, lat_a), (lng_b, lat_b)],
            RGBColor(128, 128, 128).mix(0.6),
        ))?;
    }

    for node in graph.nodes() {
        let color = category_color(node.category.as_deref());
        chart.draw_series(PointSeries::of_element(
            vec![(node.lng, node.lat)],
            4,
            color,
            &|c, s, st| EmptyElement::at(c) + Circle::new((0, 0), s, st.filled()),
        ))?;
    }

    root.present()?;
    Ok(())
}
