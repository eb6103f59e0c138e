use crate::ui::month_view::{Legend, MonthLayout};

pub trait GridTarget {
    fn show_grid(&mut self, layout: &MonthLayout);
}

pub trait LegendTarget {
    fn show_legend(&mut self, legend: &Legend);
}

/// The page elements a calendar view writes into. Every target is optional;
/// a page without a grid container gets no render at all.
pub trait MountPoints {
    fn sync_month_selector(&mut self, _month: u32) {}

    fn title(&mut self) -> Option<&mut String> {
        None
    }

    fn grid(&mut self) -> Option<&mut dyn GridTarget>;

    fn legend(&mut self) -> Option<&mut dyn LegendTarget>;
}
