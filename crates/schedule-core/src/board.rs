//! Schedule Board State
//!
//! The whole application state (item store, search box, form, modal) and
//! the transitions user actions drive it through.

use tracing::{debug, warn};

use crate::domain::{
    DomainError, DomainResult, FormField, Frequency, Repeat, ScheduleDraft, ScheduleItem,
};
use crate::repository::{Repository, ScheduleRepository, SearchableRepository};

/// Which modal is open. Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Adding,
    Editing(u32),
}

impl ModalState {
    pub fn is_adding(&self) -> bool {
        matches!(self, ModalState::Adding)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Editing(_))
    }
}

/// A user action on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Replace the search query
    Search(String),
    /// Replace one free-text form field
    SetText(FormField, String),
    SelectFrequency(Option<Frequency>),
    SelectRepeat(Option<Repeat>),
    OpenAdd,
    OpenEdit(u32),
    /// Close whichever modal is open and reset the form
    Cancel,
    /// Save the form: add in the Add modal, update in the Edit modal
    Submit,
    Delete(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    store: ScheduleRepository,
    search: String,
    form: ScheduleDraft,
    modal: ModalState,
    add_error: bool,
}

impl Board {
    pub fn new(store: ScheduleRepository) -> Self {
        Self { store, ..Default::default() }
    }

    pub fn store(&self) -> &ScheduleRepository {
        &self.store
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn form(&self) -> &ScheduleDraft {
        &self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Whether the "Empty Fields are not allowed" message is showing
    pub fn add_error(&self) -> bool {
        self.add_error
    }

    /// Items matching the current search, in store order
    pub fn filtered(&self) -> Vec<&ScheduleItem> {
        self.store.search(&self.search)
    }

    pub fn apply(&mut self, action: BoardAction) -> DomainResult<()> {
        debug!(?action, modal = ?self.modal, "board action");
        match action {
            BoardAction::Search(query) => self.search = query,
            BoardAction::SetText(field, value) => self.form.set_text(field, value),
            BoardAction::SelectFrequency(frequency) => self.form.set_frequency(frequency),
            BoardAction::SelectRepeat(repeat) => self.form.set_repeat(repeat)?,
            BoardAction::OpenAdd => {
                self.reset_form();
                self.modal = ModalState::Adding;
            }
            BoardAction::OpenEdit(id) => self.open_edit(id)?,
            BoardAction::Cancel => self.close(),
            BoardAction::Submit => self.submit()?,
            BoardAction::Delete(id) => {
                self.store.delete(id);
                if self.modal == ModalState::Editing(id) {
                    self.close();
                }
            }
        }
        Ok(())
    }

    fn open_edit(&mut self, id: u32) -> DomainResult<()> {
        let item = self
            .store
            .find_by_id(id)
            .ok_or_else(|| DomainError::NotFound(format!("schedule item {}", id)))?;
        self.form = ScheduleDraft::from_item(item);
        self.add_error = false;
        self.modal = ModalState::Editing(id);
        Ok(())
    }

    fn submit(&mut self) -> DomainResult<()> {
        match self.modal {
            ModalState::Closed => Ok(()),
            ModalState::Adding => match self.store.create(&self.form) {
                Ok(_) => {
                    self.close();
                    Ok(())
                }
                Err(e) => {
                    // Keep the modal open with the user's input intact
                    self.add_error = true;
                    Err(e)
                }
            },
            ModalState::Editing(id) => {
                if self.form.frequency().is_none() {
                    // A blanked frequency cannot be saved; keep the edit open
                    self.add_error = true;
                    return Err(DomainError::EmptyFields { missing: vec![FormField::Frequency] });
                }
                let result = self.store.update(id, self.form.to_patch()).map(|_| ());
                if let Err(e) = &result {
                    warn!(id, error = %e, "edited item no longer exists");
                }
                self.close();
                result
            }
        }
    }

    fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.add_error = false;
    }
}

/// Pure transition: the board after `action`.
///
/// Failed actions still yield the resulting state (e.g. the add error flag).
pub fn reduce(mut board: Board, action: BoardAction) -> Board {
    if let Err(e) = board.apply(action) {
        debug!(error = %e, "board action rejected");
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AllDays, MonthlyRule, Recurrence, Weekday};

    fn seeded() -> Board {
        let items = vec![
            ScheduleItem {
                id: 1,
                title: "Standup".to_string(),
                description: "Daily sync".to_string(),
                subject: "Team".to_string(),
                recurrence: Recurrence::daily(),
                schedule: "9am".to_string(),
            },
            ScheduleItem {
                id: 2,
                title: "Retro".to_string(),
                description: "Look back".to_string(),
                subject: "Team".to_string(),
                recurrence: Recurrence::monthly(MonthlyRule::LastFriday),
                schedule: "3pm".to_string(),
            },
        ];
        Board::new(ScheduleRepository::from_items(items).unwrap())
    }

    fn fill(board: Board, title: &str) -> Board {
        let board = reduce(board, BoardAction::SetText(FormField::Title, title.to_string()));
        let board = reduce(board, BoardAction::SetText(FormField::Description, "desc".to_string()));
        let board = reduce(board, BoardAction::SetText(FormField::Subject, "subj".to_string()));
        let board = reduce(board, BoardAction::SetText(FormField::Schedule, "noon".to_string()));
        reduce(board, BoardAction::SelectFrequency(Some(Frequency::Weekly)))
    }

    #[test]
    fn test_add_flow() {
        let board = reduce(seeded(), BoardAction::OpenAdd);
        assert_eq!(board.modal(), ModalState::Adding);

        let board = fill(board, "Planning");
        let board = reduce(board, BoardAction::SelectRepeat(Some(Repeat::Weekly(Weekday::Monday))));
        let board = reduce(board, BoardAction::Submit);

        assert_eq!(board.modal(), ModalState::Closed);
        assert_eq!(board.store().len(), 3);
        assert_eq!(board.form(), &ScheduleDraft::default());
        let added = board.store().list().last().unwrap();
        assert_eq!(added.title, "Planning");
        assert_eq!(added.repeat(), Some(Repeat::Weekly(Weekday::Monday)));
    }

    #[test]
    fn test_failed_add_keeps_modal_and_input() {
        let mut board = seeded();
        board.apply(BoardAction::OpenAdd).unwrap();
        board.apply(BoardAction::SetText(FormField::Description, "x".to_string())).unwrap();
        board.apply(BoardAction::SetText(FormField::Subject, "y".to_string())).unwrap();
        board.apply(BoardAction::SetText(FormField::Schedule, "z".to_string())).unwrap();
        board.apply(BoardAction::SelectFrequency(Some(Frequency::Daily))).unwrap();

        let err = board.apply(BoardAction::Submit).unwrap_err();
        assert!(err.is_empty_fields());
        assert!(board.add_error());
        assert_eq!(board.modal(), ModalState::Adding);
        assert_eq!(board.store().len(), 2);
        assert_eq!(board.form().description, "x");

        // Fixing the field and resubmitting clears the error
        board.apply(BoardAction::SetText(FormField::Title, "t".to_string())).unwrap();
        board.apply(BoardAction::Submit).unwrap();
        assert!(!board.add_error());
        assert_eq!(board.store().len(), 3);
    }

    #[test]
    fn test_each_empty_required_field_raises_add_error() {
        let required = [
            FormField::Title,
            FormField::Description,
            FormField::Subject,
            FormField::Schedule,
            FormField::Frequency,
        ];
        for blank in required {
            let mut board = fill(reduce(seeded(), BoardAction::OpenAdd), "Planning");
            match blank {
                FormField::Frequency => board.apply(BoardAction::SelectFrequency(None)).unwrap(),
                field => board.apply(BoardAction::SetText(field, String::new())).unwrap(),
            }

            let err = board.apply(BoardAction::Submit).unwrap_err();
            assert!(err.is_empty_fields(), "{} left blank", blank);
            assert!(board.add_error(), "{} left blank", blank);
            assert_eq!(board.modal(), ModalState::Adding);
            assert_eq!(board.store().len(), 2);
        }
    }

    #[test]
    fn test_edit_with_blank_frequency_stays_open() {
        let mut board = reduce(seeded(), BoardAction::OpenEdit(2));
        board.apply(BoardAction::SetText(FormField::Title, "Renamed".to_string())).unwrap();
        board.apply(BoardAction::SelectFrequency(None)).unwrap();

        let err = board.apply(BoardAction::Submit).unwrap_err();
        assert!(err.is_empty_fields());
        assert!(board.add_error());
        assert_eq!(board.modal(), ModalState::Editing(2));
        assert_eq!(board.form().title, "Renamed");

        let untouched = board.store().find_by_id(2).unwrap();
        assert_eq!(untouched.title, "Retro");
        assert_eq!(untouched.repeat(), Some(Repeat::Monthly(MonthlyRule::LastFriday)));

        // Picking a frequency again lets the edit through
        board.apply(BoardAction::SelectFrequency(Some(Frequency::Weekly))).unwrap();
        board.apply(BoardAction::Submit).unwrap();
        assert_eq!(board.modal(), ModalState::Closed);
        let edited = board.store().find_by_id(2).unwrap();
        assert_eq!(edited.title, "Renamed");
        assert_eq!(edited.frequency(), Frequency::Weekly);
        assert_eq!(edited.repeat(), None);
    }

    #[test]
    fn test_edit_flow_prepopulates_and_overwrites() {
        let board = reduce(seeded(), BoardAction::OpenEdit(2));
        assert_eq!(board.modal(), ModalState::Editing(2));
        assert_eq!(board.form().title, "Retro");
        assert_eq!(board.form().frequency(), Some(Frequency::Monthly));
        assert_eq!(board.form().repeat(), Some(Repeat::Monthly(MonthlyRule::LastFriday)));

        let board = reduce(board, BoardAction::SetText(FormField::Title, "Retrospective".to_string()));
        let board = reduce(board, BoardAction::SelectFrequency(Some(Frequency::Daily)));
        let board = reduce(board, BoardAction::Submit);

        assert_eq!(board.modal(), ModalState::Closed);
        let edited = board.store().find_by_id(2).unwrap();
        assert_eq!(edited.title, "Retrospective");
        assert_eq!(edited.repeat(), Some(Repeat::Daily(AllDays)));
        assert_eq!(board.store().find_by_id(1).unwrap().title, "Standup");
        assert_eq!(board.store().len(), 2);
    }

    #[test]
    fn test_open_edit_missing_item_stays_closed() {
        let mut board = seeded();
        assert!(board.apply(BoardAction::OpenEdit(42)).is_err());
        assert_eq!(board.modal(), ModalState::Closed);
    }

    #[test]
    fn test_cancel_resets_form_for_both_modals() {
        let board = fill(reduce(seeded(), BoardAction::OpenAdd), "half done");
        let board = reduce(board, BoardAction::Cancel);
        assert_eq!(board.modal(), ModalState::Closed);
        assert_eq!(board.form(), &ScheduleDraft::default());

        let board = reduce(board, BoardAction::OpenEdit(2));
        let board = reduce(board, BoardAction::Cancel);
        assert_eq!(board.form(), &ScheduleDraft::default());
        assert_eq!(board.store().find_by_id(2).unwrap().title, "Retro");
    }

    #[test]
    fn test_modals_are_exclusive() {
        let board = reduce(seeded(), BoardAction::OpenEdit(1));
        let board = reduce(board, BoardAction::OpenAdd);
        assert_eq!(board.modal(), ModalState::Adding);
        assert_eq!(board.form().title, "");
    }

    #[test]
    fn test_delete_item_being_edited_closes_modal() {
        let board = reduce(seeded(), BoardAction::OpenEdit(1));
        let board = reduce(board, BoardAction::Delete(1));
        assert_eq!(board.modal(), ModalState::Closed);
        assert!(board.store().find_by_id(1).is_none());

        let board = reduce(board, BoardAction::Delete(1));
        assert_eq!(board.store().len(), 1);
    }

    #[test]
    fn test_search_filters_without_mutating() {
        let board = reduce(seeded(), BoardAction::Search("TEAM".to_string()));
        assert_eq!(board.filtered().len(), 2);

        let board = reduce(board, BoardAction::Search("look".to_string()));
        let ids: Vec<u32> = board.filtered().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(board.store().len(), 2);
    }

    #[test]
    fn test_repeat_outside_domain_is_rejected() {
        let mut board = reduce(seeded(), BoardAction::OpenAdd);
        board.apply(BoardAction::SelectFrequency(Some(Frequency::Monthly))).unwrap();
        assert!(board.apply(BoardAction::SelectRepeat(Some(Repeat::Weekly(Weekday::Friday)))).is_err());
        assert_eq!(board.form().repeat(), None);
    }

    #[test]
    fn test_submit_while_closed_is_noop() {
        let board = seeded();
        let after = reduce(board.clone(), BoardAction::Submit);
        assert_eq!(after, board);
    }
}
