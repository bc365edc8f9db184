use crate::{config::AppConfig, http_client, screen::Screen};
use anyhow::{Context, Result, anyhow, bail};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResult};
use dawndoor_ui_core::{
    App, DoorEvent, Effect, Event, FormEvent, FormName, LocationFormData, NetworkFormData,
    TimerOperation, TimerOutput,
};
use log::{debug, info};
use reqwest::Client;
use std::{collections::HashMap, time::Duration};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

pub const USAGE: &str = "usage: dawndoor-panel [show | save-network <essid> <password> <can_start_ap> | save-location <latitude> <longitude> <timezone> | toggle-door]";

/// What the operator asked for on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    Show,
    SaveNetwork(NetworkFormData),
    SaveLocation(LocationFormData),
    ToggleDoor,
}

impl PanelCommand {
    /// Parse the arguments following the program name
    pub fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] | ["show"] => Ok(Self::Show),
            ["save-network", essid, password, can_start_ap] => {
                let can_start_ap = can_start_ap
                    .to_lowercase()
                    .parse::<bool>()
                    .with_context(|| format!("failed to parse can_start_ap: {can_start_ap}"))?;
                Ok(Self::SaveNetwork(NetworkFormData {
                    essid: essid.to_string(),
                    password: password.to_string(),
                    can_start_ap,
                }))
            }
            ["save-location", latitude, longitude, timezone] => {
                Ok(Self::SaveLocation(LocationFormData {
                    timezone: timezone.to_string(),
                    latitude: latitude.to_string(),
                    longitude: longitude.to_string(),
                }))
            }
            ["toggle-door"] => Ok(Self::ToggleDoor),
            _ => bail!("{USAGE}"),
        }
    }
}

/// Outcome of an effect performed in the background
enum Completion {
    Http(u64, HttpResult),
    Timer(u64),
}

/// Native shell around the core
///
/// Effects run as tokio tasks; their outcomes come back over a channel and are resolved
/// one at a time, so the core only ever sees a single caller.
pub struct Panel {
    core: Core<App>,
    client: Client,
    origin: String,
    screen: Screen,
    next_id: u64,
    http: HashMap<u64, Request<HttpRequest>>,
    timers: HashMap<u64, Request<TimerOperation>>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl Panel {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = http_client::device_client(config.device.request_timeout)?;
        let (tx, rx) = unbounded_channel();

        Ok(Self {
            core: Core::new(),
            client,
            origin: config.device.url.clone(),
            screen: Screen::default(),
            next_id: 0,
            http: HashMap::new(),
            timers: HashMap::new(),
            tx,
            rx,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Load everything, perform the requested action and wait for the device to answer
    pub async fn run(&mut self, command: PanelCommand) -> Result<()> {
        self.dispatch(Event::Initialize);
        self.settle().await?;

        match command {
            PanelCommand::Show => return Ok(()),
            PanelCommand::SaveNetwork(form) => {
                info!("saving network {}", form.essid);
                self.dispatch(Event::Form(FormEvent::NetworkFormUpdate(form)));
                self.dispatch(Event::Form(FormEvent::Submit(FormName::Network)));
            }
            PanelCommand::SaveLocation(form) => {
                info!("saving location {}", form.timezone);
                self.dispatch(Event::Form(FormEvent::LocationFormUpdate(form)));
                self.dispatch(Event::Form(FormEvent::Submit(FormName::Location)));
            }
            PanelCommand::ToggleDoor => {
                self.dispatch(Event::Door(DoorEvent::Toggle));
            }
        }

        self.settle().await
    }

    pub fn dispatch(&mut self, event: Event) {
        let effects = self.core.process_event(event);
        self.process_effects(effects)
    }

    /// Wait until no HTTP request is outstanding
    ///
    /// Timers keep running; one that fires meanwhile is handled as usual.
    pub async fn settle(&mut self) -> Result<()> {
        while !self.http.is_empty() {
            let completion = self
                .rx
                .recv()
                .await
                .context("failed to receive effect outcome")?;
            self.complete(completion)?;
        }

        Ok(())
    }

    fn complete(&mut self, completion: Completion) -> Result<()> {
        let effects = match completion {
            Completion::Http(id, result) => {
                let mut request = self
                    .http
                    .remove(&id)
                    .with_context(|| format!("failed to find http request {id}"))?;
                self.core
                    .resolve(&mut request, result)
                    .map_err(|e| anyhow!("failed to resolve http request: {e:?}"))?
            }
            Completion::Timer(id) => {
                let mut request = self
                    .timers
                    .remove(&id)
                    .with_context(|| format!("failed to find timer {id}"))?;
                self.core
                    .resolve(&mut request, TimerOutput::Elapsed)
                    .map_err(|e| anyhow!("failed to resolve timer: {e:?}"))?
            }
        };

        self.process_effects(effects);
        Ok(())
    }

    fn process_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(_) => self.screen.apply(&self.core.view()),
                Effect::Http(request) => self.spawn_http(request),
                Effect::Timer(request) => self.spawn_timer(request),
            }
        }
    }

    fn spawn_http(&mut self, request: Request<HttpRequest>) {
        let id = self.allocate_id();
        let operation = request.operation.clone();
        let client = self.client.clone();
        let origin = self.origin.clone();
        let tx = self.tx.clone();

        self.http.insert(id, request);

        tokio::spawn(async move {
            let result = http_client::execute(&client, &origin, &operation).await;
            // The receiver only goes away together with the panel
            let _ = tx.send(Completion::Http(id, result));
        });
    }

    fn spawn_timer(&mut self, request: Request<TimerOperation>) {
        let id = self.allocate_id();
        let TimerOperation::NotifyAfter { millis } = request.operation;
        let tx = self.tx.clone();

        debug!("timer {id} set for {millis}ms");
        self.timers.insert(id, request);

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            let _ = tx.send(Completion::Timer(id));
        });
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
