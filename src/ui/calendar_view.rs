use tracing::debug;

use crate::calendar::{CalendarCursor, Clock, HolidayTable, LocalClock};
use crate::ui::month_view::{MonthLayout, calculate_layout};
use crate::ui::mount::MountPoints;

/// Monthly calendar component. Owns the cursor and the holiday table; all
/// output goes through a [`MountPoints`] implementation.
pub struct CalendarView {
    cursor: CalendarCursor,
    holidays: HolidayTable,
    clock: Box<dyn Clock>,
}

impl CalendarView {
    pub fn new(holidays: HolidayTable) -> Self {
        Self::with_clock(holidays, Box::new(LocalClock))
    }

    pub fn with_clock(holidays: HolidayTable, clock: Box<dyn Clock>) -> Self {
        let cursor = CalendarCursor::from_date(clock.today());
        Self { cursor, holidays, clock }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn initialize(&mut self, mount: &mut dyn MountPoints) {
        self.cursor = CalendarCursor::from_date(self.clock.today());
        debug!(cursor = %self.cursor, "calendar initialized");
        mount.sync_month_selector(self.cursor.month());
        self.render(mount);
    }

    /// Jumps to an arbitrary month, e.g. from a command or CLI flag.
    pub fn show(&mut self, cursor: CalendarCursor, mount: &mut dyn MountPoints) {
        self.transition(cursor, mount);
    }

    pub fn on_month_select(&mut self, month: u32, mount: &mut dyn MountPoints) {
        self.transition(self.cursor.with_month(month), mount);
    }

    pub fn on_prev(&mut self, mount: &mut dyn MountPoints) {
        self.transition(self.cursor.prev(), mount);
    }

    pub fn on_next(&mut self, mount: &mut dyn MountPoints) {
        self.transition(self.cursor.next(), mount);
    }

    pub fn on_today(&mut self, mount: &mut dyn MountPoints) {
        self.transition(CalendarCursor::from_date(self.clock.today()), mount);
    }

    fn transition(&mut self, cursor: CalendarCursor, mount: &mut dyn MountPoints) {
        debug!(from = %self.cursor, to = %cursor, "calendar navigation");
        self.cursor = cursor;
        mount.sync_month_selector(cursor.month());
        self.render(mount);
    }

    pub fn layout(&self) -> MonthLayout {
        calculate_layout(self.cursor, &self.holidays, self.clock.today())
    }

    /// Writes title, grid and legend. Skipped entirely when the page has no
    /// grid container; the legend is skipped alone when only it is missing.
    pub fn render(&self, mount: &mut dyn MountPoints) {
        if mount.grid().is_none() {
            debug!("no grid container mounted, skipping render");
            return;
        }

        let layout = self.layout();

        if let Some(title) = mount.title() {
            *title = layout.title.clone();
        }
        if let Some(grid) = mount.grid() {
            grid.show_grid(&layout);
        }
        if let Some(legend) = mount.legend() {
            legend.show_legend(&layout.legend);
        }
    }
}
