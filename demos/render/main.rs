use actgraph::{ActionGraph, Config, FieldMapping, FormStore, PrerequisiteGraph, filter_fields, map_graph};

fn main() {
    let text = include_str!("./graph.json");
    let config = Config::load_from_str(include_str!("./actgraph.toml")).unwrap();

    let graph = ActionGraph::from_json(text).unwrap();
    println!("{}", PrerequisiteGraph::new(&graph).schema());

    let rendered = map_graph(&graph);
    println!("{}", serde_json::to_string_pretty(&rendered.nodes).unwrap());

    let mut store = FormStore::from_config(&config);
    store.open_node_detail(rendered.selection("form-d").unwrap());
    store.open_picker_for("reviewer_email");

    for source in store.mapping_sources() {
        println!("{} ({}): {:?}", source.name, source.kind.as_ref(), filter_fields(&source.fields, "mail"));
    }

    store.commit_field_mapping(Some(FieldMapping::new("f_contact", "Form A", "email")));
    println!("{}", serde_json::to_string_pretty(store.form_state("form-d").unwrap()).unwrap());
}
