use crate::terminal::colors;
use colored::*;
use triage_common::targets::TargetList;

pub fn join_ports<'a>(ports: impl IntoIterator<Item = &'a u16>) -> String {
    ports
        .into_iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

pub fn target_list_to_detail(list: &TargetList) -> Vec<(String, ColoredString)> {
    let ports: ColoredString = match list.ports().is_empty() {
        true => "none".dimmed(),
        false => join_ports(list.ports()).color(colors::PORT),
    };
    let keywords: ColoredString = match list.keywords().is_empty() {
        true => "none".dimmed(),
        false => list.keywords().join(",").color(colors::KEYWORD),
    };

    vec![
        ("Name".to_string(), list.name.as_str().color(colors::ACCENT)),
        ("Ports".to_string(), ports),
        ("Service info".to_string(), keywords),
    ]
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    match count {
        1 => format!("{count} {singular}"),
        _ => format!("{count} {plural}"),
    }
}
