use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{Settings, Traversal};
use crate::errors::CollectionError;
use crate::list::PositionalList;
use crate::stack::Stack;
use crate::tree::OrderedTree;
use crate::tree_traits::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        Commands::Tree {
            values,
            order,
            render,
        } => _tree(&settings, values, order, *render),
        Commands::List {
            values,
            front,
            end,
            delete,
        } => _list(&settings, values, *front, *end, *delete),
        Commands::Stack { values } => _stack(values),
        Commands::Config { command } => _config(&settings, command),
    }
}

/// Search tree rooted at the first value, the rest inserted in order.
pub fn build_tree(values: &[i64]) -> CliResult<OrderedTree<i64>> {
    let (&root, rest) = values
        .split_first()
        .ok_or(CollectionError::EmptyCollection("tree"))?;
    let mut tree = OrderedTree::new(root);
    tree.extend(rest.iter().copied());
    Ok(tree)
}

/// Values visited by `order`, in visiting order.
pub fn traverse(tree: &OrderedTree<i64>, order: Traversal) -> Vec<i64> {
    match order {
        Traversal::In => tree.in_order().into_iter().copied().collect(),
        Traversal::Bft => tree.bft().copied().collect(),
        Traversal::Dft => tree.dft().copied().collect(),
        Traversal::Pre => tree.pre_order().into_iter().copied().collect(),
        Traversal::Post => tree.post_order().into_iter().copied().collect(),
    }
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings, values: &[i64], orders: &[Traversal], render: bool) -> CliResult<()> {
    let values = if values.is_empty() {
        &settings.tree.values[..]
    } else {
        values
    };
    let orders = if orders.is_empty() {
        &settings.tree.orders[..]
    } else {
        orders
    };
    let tree = build_tree(values)?;

    if render {
        output::header("tree");
        output::info(&tree.to_tree_string());
    }
    for &order in orders {
        output::header(order.label());
        output::values(traverse(&tree, order));
    }
    output::action("max", tree.get_max());
    Ok(())
}

/// Applies the list flags in a fixed order: front, then end, then delete.
/// Each flag targets the first node holding its value at the time it runs.
pub fn apply_list_ops(
    list: &mut PositionalList<i64>,
    front: Option<i64>,
    end: Option<i64>,
    delete: Option<i64>,
) -> CliResult<()> {
    let find = |list: &PositionalList<i64>, value: i64| {
        list.find(&value)
            .ok_or_else(|| CliError::InvalidArgs(format!("no node holds {value}")))
    };

    if let Some(value) = front {
        let handle = find(list, value)?;
        list.move_to_front(handle)?;
    }
    if let Some(value) = end {
        let handle = find(list, value)?;
        list.move_to_end(handle)?;
    }
    if let Some(value) = delete {
        let handle = find(list, value)?;
        list.delete(handle)?;
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _list(
    settings: &Settings,
    values: &[i64],
    front: Option<i64>,
    end: Option<i64>,
    delete: Option<i64>,
) -> CliResult<()> {
    let values = if values.is_empty() {
        &settings.list.values[..]
    } else {
        values
    };
    let mut list: PositionalList<i64> = values.iter().copied().collect();
    apply_list_ops(&mut list, front, end, delete)?;

    output::info(&list);
    match list.get_max() {
        Some(max) => output::action("max", max),
        None => output::warning("list is empty"),
    }
    Ok(())
}

#[instrument]
fn _stack(values: &[i64]) -> CliResult<()> {
    if values.is_empty() {
        return Err(CliError::Usage("stack needs at least one value".into()));
    }
    let mut stack = Stack::new();
    for &value in values {
        stack.push(value);
    }
    while let Some(value) = stack.pop() {
        output::info(&value);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
