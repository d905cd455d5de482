//! # Gamepad teleoperation
//!
//! Maps gamepad buttons to the flight commands used on the test range:
//! emergency stop, take-off to the hover point, landing, flying to a test
//! point and switching the firmware's position controller.
//!
//! Button handling is stateful because commands fire on rising edges, not
//! on button level. [`Teleop`] owns that state; every joystick message gets
//! fed to [`Teleop::handle_input`], which dispatches through the
//! [`FlightCommands`] trait the flight stack implements.

use async_trait::async_trait;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::sequence::Waypoint;
use crate::Result;

/// Hover height after take-off, meters.
pub const HOVER_HEIGHT: f32 = 1.0;
/// Take-off climb time, seconds.
pub const TAKEOFF_DURATION: f32 = 3.0;
/// Landing target height, meters.
pub const LAND_HEIGHT: f32 = 0.02;
/// Landing descent time, seconds.
pub const LAND_DURATION: f32 = 3.5;
/// Travel time for button-triggered go-to moves, seconds.
pub const GOTO_DURATION: f32 = 2.0;

const BUTTON_COUNT: usize = 8;

/// Xbox 360 button layout, by joystick driver button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Button {
    /// A button.
    Green = 0,
    /// B button.
    Red = 1,
    /// X button.
    Blue = 2,
    /// Y button.
    Yellow = 3,
    /// Left bumper.
    LeftBumper = 4,
    /// Right bumper.
    RightBumper = 5,
    /// Back button.
    Back = 6,
    /// Start button.
    Start = 7,
}

/// Position controller selection, the values of the firmware's
/// `stabilizer/controller` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Controller {
    /// Cascaded PID, the firmware default.
    Pid = 1,
    /// Mellinger position controller.
    Mellinger = 2,
    /// Incremental nonlinear dynamic inversion.
    Indi = 3,
}

impl Controller {
    /// The controller a switch command selects next.
    ///
    /// Flight tests compare Mellinger and INDI, so those two alternate;
    /// from any other controller the first switch selects Mellinger.
    pub fn toggled(self) -> Controller {
        match self {
            Controller::Mellinger => Controller::Indi,
            _ => Controller::Mellinger,
        }
    }
}

/// Pressed-state of the gamepad buttons in one joystick message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamepadSnapshot {
    pressed: [bool; BUTTON_COUNT],
}

impl GamepadSnapshot {
    /// Builds a snapshot from the joystick driver's button array, where a
    /// button is down iff its entry is `1`. Missing trailing entries count
    /// as released.
    pub fn from_raw(buttons: &[i32]) -> Self {
        let mut pressed = [false; BUTTON_COUNT];
        for (state, raw) in pressed.iter_mut().zip(buttons) {
            *state = *raw == 1;
        }

        GamepadSnapshot { pressed }
    }

    /// Whether `button` is down in this snapshot.
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed[u8::from(button) as usize]
    }
}

/// The flight commands teleoperation dispatches.
///
/// Implemented against the flight stack in use. The maneuver methods resolve
/// when the maneuver is complete, so dispatching take-off followed by go-to
/// flies them in order.
#[async_trait]
pub trait FlightCommands {
    /// Cut motor output immediately.
    async fn emergency_stop(&self) -> Result<()>;
    /// Climb vertically to `height` meters over `duration` seconds.
    async fn take_off(&self, height: f32, duration: f32) -> Result<()>;
    /// Descend vertically to `height` meters over `duration` seconds.
    async fn land(&self, height: f32, duration: f32) -> Result<()>;
    /// Fly to `waypoint` over `duration` seconds.
    async fn go_to(&self, waypoint: &Waypoint, duration: f32) -> Result<()>;
    /// Select the position controller (`stabilizer/controller`).
    async fn set_controller(&self, controller: Controller) -> Result<()>;
}

/// Button-to-command teleoperation state.
///
/// Owns the previous button snapshot for edge detection and the current
/// controller selection. One instance per gamepad.
#[derive(Debug)]
pub struct Teleop {
    previous: Option<GamepadSnapshot>,
    controller: Controller,
    home: Waypoint,
    test_point: Waypoint,
}

impl Teleop {
    /// Creates the teleoperation state.
    ///
    /// # Arguments
    /// * `controller` - The controller currently active in the firmware.
    /// * `home` - Where `Start` sends the quad after take-off.
    /// * `test_point` - Where `Blue` sends the quad.
    pub fn new(controller: Controller, home: Waypoint, test_point: Waypoint) -> Self {
        Teleop {
            previous: None,
            controller,
            home,
            test_point,
        }
    }

    /// The controller teleoperation believes is active.
    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// A button that is down now and was not down in the previous snapshot.
    /// Before the first snapshot every held button counts as an edge.
    fn rising_edge(&self, button: Button, snapshot: &GamepadSnapshot) -> bool {
        snapshot.pressed(button)
            && self
                .previous
                .map_or(true, |previous| !previous.pressed(button))
    }

    /// Processes one gamepad snapshot and dispatches every command whose
    /// button saw a rising edge, in a fixed order: emergency stop, take-off,
    /// land, controller switch, go-to.
    ///
    /// A failed controller switch is logged as a warning and teleoperation
    /// continues. Any other failure is returned only after the remaining
    /// edges have been dispatched, so a rejected command cannot swallow a
    /// simultaneous land or emergency stop; the first error wins. Every
    /// edge counts as handled either way, and the next message will not
    /// re-fire it.
    pub async fn handle_input(
        &mut self,
        commands: &impl FlightCommands,
        snapshot: GamepadSnapshot,
    ) -> Result<()> {
        let emergency = self.rising_edge(Button::Red, &snapshot);
        let take_off = self.rising_edge(Button::Start, &snapshot);
        let land = self.rising_edge(Button::Back, &snapshot);
        let switch_controller = self.rising_edge(Button::Green, &snapshot);
        let go_to = self.rising_edge(Button::Blue, &snapshot);
        self.previous = Some(snapshot);

        let mut outcome = Ok(());

        if emergency {
            outcome = outcome.and(commands.emergency_stop().await);
        }
        if take_off {
            outcome = outcome.and(self.take_off_to_home(commands).await);
        }
        if land {
            outcome = outcome.and(commands.land(LAND_HEIGHT, LAND_DURATION).await);
        }
        if switch_controller {
            self.controller = self.controller.toggled();
            if let Err(error) = commands.set_controller(self.controller).await {
                log::warn!("could not switch to {:?}: {}", self.controller, error);
            }
        }
        if go_to {
            outcome = outcome.and(commands.go_to(&self.test_point, GOTO_DURATION).await);
        }

        outcome
    }

    /// Climb to the hover height, then move to home. The move is skipped
    /// when the climb fails.
    async fn take_off_to_home(&self, commands: &impl FlightCommands) -> Result<()> {
        commands.take_off(HOVER_HEIGHT, TAKEOFF_DURATION).await?;
        commands.go_to(&self.home, GOTO_DURATION).await
    }
}
