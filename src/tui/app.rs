use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::resolve_data_dir;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::{Filter, Task, TaskId};
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// What the edit input commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Draft for a brand new task
    New,
    /// Renaming an existing task
    Task(TaskId),
}

/// Single-line input state for Edit mode
#[derive(Debug, Clone)]
pub struct EditState {
    pub target: EditTarget,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub data_dir: PathBuf,
    pub filter: Filter,
    pub mode: Mode,
    /// Present iff mode == Edit
    pub edit: Option<EditState>,
    /// Cursor index into the visible (filtered) rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_hints: bool,
    /// Transient message for the status row (salvage notice, write errors)
    pub status: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, data_dir: PathBuf, theme: Theme, show_hints: bool) -> Self {
        let status = store.salvaged().map(|p| {
            format!("tasks.json was unreadable; moved aside to {}", p.display())
        });
        App {
            store,
            data_dir,
            filter: Filter::All,
            mode: Mode::Navigate,
            edit: None,
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
            theme,
            show_hints,
            status,
        }
    }

    /// The rows currently visible through the filter
    pub fn visible(&self) -> Vec<&Task> {
        self.filter.apply(self.store.tasks())
    }

    pub fn visible_len(&self) -> usize {
        self.store
            .tasks()
            .iter()
            .filter(|t| self.filter.accepts(t))
            .count()
    }

    /// Id of the task under the cursor, if any
    pub fn task_under_cursor(&self) -> Option<TaskId> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    /// Live counts for the tab bar: (active, completed)
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.store.tasks().iter().filter(|t| t.completed).count();
        (self.store.tasks().len() - completed, completed)
    }

    /// Clamp the cursor after the visible list changed
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    // -----------------------------------------------------------------------
    // Edit state machine
    // -----------------------------------------------------------------------

    /// Navigate → Edit with an empty draft for a new task
    pub fn start_add(&mut self) {
        self.mode = Mode::Edit;
        self.edit = Some(EditState {
            target: EditTarget::New,
            buffer: String::new(),
            cursor: 0,
        });
    }

    /// Navigate → Edit pre-filled with the selected task's name
    pub fn start_edit(&mut self) {
        let Some(id) = self.task_under_cursor() else {
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };
        let buffer = task.name.clone();
        let cursor = buffer.len();
        self.mode = Mode::Edit;
        self.edit = Some(EditState {
            target: EditTarget::Task(id),
            buffer,
            cursor,
        });
    }

    /// Commit the edit buffer and return to Navigate. Text that trims to
    /// empty does not commit and stays in Edit.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.edit.as_ref() else {
            return;
        };
        if edit.buffer.trim().is_empty() {
            return;
        }
        let result = match edit.target {
            EditTarget::New => self.store.add(&edit.buffer).map(|_| ()),
            EditTarget::Task(id) => self.store.edit(id, &edit.buffer).map(|_| ()),
        };
        if let Err(e) = result {
            self.status = Some(e.to_string());
        }
        self.mode = Mode::Navigate;
        self.edit = None;
        self.clamp_cursor();
    }

    /// Edit → Navigate without committing
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Navigate;
        self.edit = None;
    }

    // -----------------------------------------------------------------------
    // Navigate-mode mutations
    // -----------------------------------------------------------------------

    /// Flip the selected task's completed flag
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.task_under_cursor() else {
            return;
        };
        if let Err(e) = self.store.toggle(id) {
            self.status = Some(e.to_string());
        }
        // Under Active/Completed the row just left the view
        self.clamp_cursor();
    }

    /// Remove the selected task
    pub fn remove_selected(&mut self) {
        let Some(id) = self.task_under_cursor() else {
            return;
        };
        if let Err(e) = self.store.remove(id) {
            self.status = Some(e.to_string());
        }
        self.clamp_cursor();
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    let Some(ui_state) = read_ui_state(&app.data_dir) else {
        return;
    };
    app.filter = ui_state.filter;
    app.cursor = ui_state.cursor;
    app.scroll_offset = ui_state.scroll_offset;
    app.clamp_cursor();
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    let ui_state = UiState {
        filter: app.filter,
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(&app.data_dir, &ui_state);
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir_override)?;
    let store = TaskStore::open(&data_dir)?;
    let config = load_config(&data_dir)?;
    let theme = Theme::from_config(&config.ui);

    let mut app = App::new(store, data_dir, theme, config.ui.show_hints);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
