use crate::model::{Allocation, Gender, Hostel, Inventory, Room, RoomStatus};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    RoomDetail,
    AllocationBrowser,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Genders,
    Hostels,
    Rooms,
}

pub struct App {
    pub inventory: Inventory,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_gender: usize, // 0 = "All", 1+ = Gender::ALL index
    pub selected_hostel: usize,
    pub selected_room: usize,
    pub selected_allocation: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            view: View::Dashboard,
            focus_panel: FocusPanel::Hostels, // Start on Hostels
            selected_gender: 0,
            selected_hostel: 0,
            selected_room: 0,
            selected_allocation: 0,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::RoomDetail => super::dashboard::draw_room_detail(frame, self),
            View::AllocationBrowser => super::dashboard::draw_allocation_browser(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Dashboard => self.handle_dashboard_keys(code),
            View::RoomDetail => self.handle_detail_keys(code),
            View::AllocationBrowser => self.handle_allocation_keys(code),
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        self.status_message = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Enter => self.enter_room_detail(),
            KeyCode::Char('a') => self.enter_allocation_browser(),
            KeyCode::Char('n') => self.add_room_to_selected_hostel(),
            KeyCode::Char('x') => self.remove_focused(),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Genders => self.previous_gender(),
            FocusPanel::Hostels => self.previous_hostel(),
            FocusPanel::Rooms => self.previous_room(),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Genders => self.next_gender(),
            FocusPanel::Hostels => self.next_hostel(),
            FocusPanel::Rooms => self.next_room(),
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Rooms => self.focus_panel = FocusPanel::Hostels,
            FocusPanel::Hostels => self.focus_panel = FocusPanel::Genders,
            FocusPanel::Genders => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Genders => self.focus_panel = FocusPanel::Hostels,
            FocusPanel::Hostels => self.focus_panel = FocusPanel::Rooms,
            FocusPanel::Rooms => {}
        }
    }

    fn previous_gender(&mut self) {
        if self.selected_gender > 0 {
            self.selected_gender -= 1;
            self.selected_hostel = 0;
            self.selected_room = 0;
        }
    }

    fn next_gender(&mut self) {
        if self.selected_gender < Gender::ALL.len() {
            self.selected_gender += 1;
            self.selected_hostel = 0;
            self.selected_room = 0;
        }
    }

    fn previous_hostel(&mut self) {
        if self.selected_hostel > 0 {
            self.selected_hostel -= 1;
            self.selected_room = 0;
        }
    }

    fn next_hostel(&mut self) {
        let filtered_count = self.get_filtered_hostels().len();
        if self.selected_hostel < filtered_count.saturating_sub(1) {
            self.selected_hostel += 1;
            self.selected_room = 0;
        }
    }

    fn previous_room(&mut self) {
        if self.selected_room > 0 {
            self.selected_room -= 1;
        }
    }

    fn next_room(&mut self) {
        let room_count = self.get_hostel_rooms().len();
        if self.selected_room < room_count.saturating_sub(1) {
            self.selected_room += 1;
        }
    }

    fn enter_room_detail(&mut self) {
        // Only enter detail when focus is on Rooms panel
        if self.focus_panel == FocusPanel::Rooms && self.get_selected_room().is_some() {
            self.view = View::RoomDetail;
            self.status_message = None;
        }
    }

    fn enter_allocation_browser(&mut self) {
        if self.get_selected_hostel().is_some() {
            self.view = View::AllocationBrowser;
            self.selected_allocation = 0;
            self.status_message = None;
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        self.status_message = None;
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Dashboard,
            KeyCode::Left | KeyCode::Char('h') => self.previous_room_in_detail(),
            KeyCode::Right | KeyCode::Char('l') => self.next_room_in_detail(),
            KeyCode::Enter => self.enter_allocation_browser(),
            KeyCode::Char('m') => self.toggle_maintenance(),
            _ => {}
        }
    }

    fn handle_allocation_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.view = View::Dashboard;
                self.status_message = None;
            }
            KeyCode::Up | KeyCode::Char('k') => self.previous_allocation(),
            KeyCode::Down | KeyCode::Char('j') => self.next_allocation(),
            KeyCode::Char('r') => self.revoke_selected_allocation(),
            _ => {}
        }
    }

    /// Previous room of the hostel (wrap around)
    fn previous_room_in_detail(&mut self) {
        let count = self.get_hostel_rooms().len();
        if count == 0 {
            return;
        }
        self.selected_room = if self.selected_room > 0 {
            self.selected_room - 1
        } else {
            count - 1
        };
    }

    /// Next room of the hostel (wrap around)
    fn next_room_in_detail(&mut self) {
        let count = self.get_hostel_rooms().len();
        if count == 0 {
            return;
        }
        self.selected_room = (self.selected_room + 1) % count;
    }

    fn previous_allocation(&mut self) {
        if self.selected_allocation > 0 {
            self.selected_allocation -= 1;
        }
    }

    fn next_allocation(&mut self) {
        let count = self.get_hostel_allocations().len();
        if self.selected_allocation < count.saturating_sub(1) {
            self.selected_allocation += 1;
        }
    }

    fn revoke_selected_allocation(&mut self) {
        let id = match self.get_selected_allocation() {
            Some(a) => a.id.clone(),
            None => return,
        };

        self.status_message = Some(match self.inventory.revoke_allocation(&id) {
            Ok(allocation) => format!(
                "Allocation for {} has been revoked",
                allocation.student_name
            ),
            Err(e) => e.to_string(),
        });
    }

    /// Puts the selected room under maintenance, or back into service with
    /// the status its occupancy implies.
    fn toggle_maintenance(&mut self) {
        let (id, number, capacity, status) = match self.get_selected_room() {
            Some(room) => {
                let status = if room.status == RoomStatus::Maintenance {
                    RoomStatus::from_occupancy(room.occupants.len(), room.capacity)
                } else {
                    RoomStatus::Maintenance
                };
                (room.id.clone(), room.room_number.clone(), room.capacity, status)
            }
            None => return,
        };

        self.status_message = Some(
            match self.inventory.update_room(&id, &number, capacity, status) {
                Ok(()) => format!("Room {number} set to {status}"),
                Err(e) => e.to_string(),
            },
        );
    }

    /// Adds an empty room to the selected hostel, copying the capacity of
    /// the selected room (or the hostel's first room type) and taking the
    /// next free `{capacity}0{i}` number.
    fn add_room_to_selected_hostel(&mut self) {
        let Some(hostel) = self.get_selected_hostel() else {
            return;
        };
        let capacity = match self.get_selected_room() {
            Some(room) => room.capacity,
            None => match hostel.room_types.first() {
                Some(&capacity) => capacity,
                None => return,
            },
        };
        let hostel_id = hostel.id.clone();
        let number = (1..)
            .map(|i| format!("{capacity}0{i}"))
            .find(|number| self.inventory.room(&Room::id_for(&hostel_id, number)).is_none())
            .unwrap_or_default();

        self.status_message = Some(
            match self
                .inventory
                .add_room(&hostel_id, &number, capacity, RoomStatus::Available)
            {
                Ok(room) => format!("Added room {} ({}-bed)", room.room_number, room.capacity),
                Err(e) => e.to_string(),
            },
        );
    }

    /// Removes the selected hostel or room, depending on the focused panel.
    fn remove_focused(&mut self) {
        let result = match self.focus_panel {
            FocusPanel::Genders => return,
            FocusPanel::Hostels => {
                let Some(id) = self.get_selected_hostel().map(|h| h.id.clone()) else {
                    return;
                };
                self.inventory
                    .remove_hostel(&id)
                    .map(|hostel| format!("Removed {}", hostel.name))
            }
            FocusPanel::Rooms => {
                let Some(id) = self.get_selected_room().map(|r| r.id.clone()) else {
                    return;
                };
                self.inventory
                    .remove_room(&id)
                    .map(|room| format!("Removed room {}", room.room_number))
            }
        };

        self.selected_hostel = self
            .selected_hostel
            .min(self.get_filtered_hostels().len().saturating_sub(1));
        self.selected_room = self
            .selected_room
            .min(self.get_hostel_rooms().len().saturating_sub(1));
        self.status_message = Some(result.unwrap_or_else(|e| e.to_string()));
    }

    /// Get the gender filter (None if "All" is selected)
    #[must_use]
    pub fn get_selected_gender(&self) -> Option<Gender> {
        self.selected_gender
            .checked_sub(1)
            .and_then(|i| Gender::ALL.get(i).copied())
    }

    /// Get hostels filtered by selected gender
    #[must_use]
    pub fn get_filtered_hostels(&self) -> Vec<&Hostel> {
        match self.get_selected_gender() {
            None => self.inventory.hostels.iter().collect(),
            Some(gender) => self
                .inventory
                .hostels
                .iter()
                .filter(|h| h.gender == gender)
                .collect(),
        }
    }

    #[must_use]
    pub fn get_selected_hostel(&self) -> Option<&Hostel> {
        self.get_filtered_hostels()
            .get(self.selected_hostel)
            .copied()
    }

    #[must_use]
    pub fn get_hostel_rooms(&self) -> Vec<&Room> {
        self.get_selected_hostel()
            .map(|h| self.inventory.rooms_for(&h.id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_selected_room(&self) -> Option<&Room> {
        self.get_hostel_rooms().get(self.selected_room).copied()
    }

    #[must_use]
    pub fn get_room_allocations(&self) -> Vec<&Allocation> {
        self.get_selected_room()
            .map(|r| self.inventory.allocations_for_room(&r.id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_hostel_allocations(&self) -> Vec<&Allocation> {
        self.get_selected_hostel()
            .map(|h| self.inventory.allocations_for_hostel(&h.id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_selected_allocation(&self) -> Option<&Allocation> {
        self.get_hostel_allocations()
            .get(self.selected_allocation)
            .copied()
    }

    /// Get selected gender name (for display)
    #[must_use]
    pub fn get_selected_gender_name(&self) -> String {
        self.get_selected_gender()
            .map_or_else(|| "All".to_string(), |g| g.to_string())
    }
}
