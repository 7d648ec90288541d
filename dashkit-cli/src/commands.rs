use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use dashkit_lib::TabularView;
use dashkit_lib::config::TableConfig;
use dashkit_lib::demo::{apply_user_action, demo_users, user_columns, users_config};
use dashkit_lib::picker::{Binding, DateField, DateTimeField, parse_date};
use dashkit_lib::table::{SearchMode, SortDirection, TableHandlers};
use log::{debug, info};

use crate::output;

pub struct UsersArgs {
    pub query: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub fuzzy: bool,
    pub select: Vec<String>,
    pub select_all: bool,
    pub action: Option<String>,
    pub hide: Vec<String>,
    pub export: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

type PendingAction = Arc<Mutex<Option<(String, Vec<String>)>>>;

fn load_config(path: Option<&PathBuf>) -> Result<TableConfig> {
    let Some(path) = path else {
        return Ok(users_config());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(file).with_context(|| format!("parsing config {}", path.display()))?;
    info!("loaded table config from {}", path.display());
    Ok(config)
}

fn parse_sort(spec: &str) -> Result<(&str, SortDirection)> {
    match spec.split_once(':') {
        Some((column, direction)) => {
            let direction = direction.parse::<SortDirection>().map_err(anyhow::Error::msg)?;
            Ok((column, direction))
        }
        None => Ok((spec, SortDirection::Asc)),
    }
}

pub fn users(args: UsersArgs) -> Result<()> {
    if args.page == 0 {
        bail!("pages are numbered from 1");
    }
    let mut config = load_config(args.config.as_ref())?;
    if args.fuzzy {
        config = config.with_search_mode(SearchMode::Fuzzy);
    }

    let pending: PendingAction = Arc::default();
    let sink = Arc::clone(&pending);
    let handlers = TableHandlers::new().on_bulk_action(move |action, records| {
        let ids = records.iter().map(|r| r.id().to_string()).collect();
        if let Ok(mut slot) = sink.lock() {
            *slot = Some((action.to_string(), ids));
        }
    });

    let mut view = TabularView::new(user_columns(), demo_users(), config).with_handlers(handlers);

    if let Some(query) = args.query {
        view.set_global_query(query);
    }
    if let Some(status) = args.status {
        view.set_status_filter(status)?;
    }
    if let Some(spec) = args.sort.as_deref() {
        let (column, direction) = parse_sort(spec)?;
        view.set_sort(column, direction)?;
    }
    for column in &args.hide {
        view.set_column_visible(column, false)?;
    }
    if let Some(size) = args.page_size {
        view.set_page_size(size)?;
    }

    for id in &args.select {
        view.select_row(id);
    }
    if args.select_all {
        view.select_all_filtered();
    }

    if let Some(action) = args.action.as_deref() {
        if let Some(warning) = view.bulk_warning(action) {
            debug!("{warning}");
        }
        let count = view.dispatch_bulk_action(action)?;
        let taken = pending.lock().ok().and_then(|mut slot| slot.take());
        match taken {
            Some((action, ids)) => {
                let mut rows = view.rows().to_vec();
                let message = apply_user_action(&mut rows, &action, &ids);
                view.set_rows(rows);
                println!("{message}");
            }
            None if count == 0 => println!("No rows selected; nothing to do."),
            None => bail!("bulk action '{action}' was not delivered"),
        }
    }

    view.set_page_index(args.page - 1);

    if let Some(path) = &args.export {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let written = view.export_csv(file)?;
        println!("Exported {} row(s) to {}", written, path.display());
    }

    print!("{}", output::render_table(&view.render()));
    Ok(())
}

pub fn date(text: &str, default: Option<&str>, time: Option<&str>) -> Result<()> {
    let default = default
        .map(parse_date)
        .transpose()
        .context("invalid --default date")?;

    let mut field = DateField::new(Binding::Uncontrolled { default });
    field.on_input(text);
    field.on_blur();

    println!("text:  {}", field.text());
    println!("value: {}", field.form_value());

    if let Some(time) = time {
        let mut datetime = DateTimeField::new(Binding::default());
        datetime.on_time_input(time);
        datetime.select_date(field.value());
        println!("time:  {}", datetime.time_text());
        println!("at:    {}", datetime.text());
    }
    Ok(())
}
