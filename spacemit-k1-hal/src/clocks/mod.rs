//! Clock tree module.
//!
//! The clock tree of the K1 is spread over four clock controller blocks, the [Domain]s. Every
//! domain is described by a static table of [ClockDescriptor]s. The [ClockController] registers
//! these tables, links every clock to its parents by name and then provides the rate, gating and
//! parent selection operations for all clocks through [ClockHandle]s.
//!
//! Parents are linked in registration order. A clock which names a parent that is not registered
//! yet is put on a retry list. This list is re-processed a bounded number of times after every
//! domain registration. [ClockController::finalize] reports clocks which still have unresolved
//! parents.
//!
//! Enabling a clock enables its active parent first. Disabling a clock only gates the clock
//! itself, parents keep running because there is no usage tracking.
use embedded_hal::delay::DelayNs;

use crate::{regmap::RegisterMap, time::Hertz};

pub mod ddn;
pub mod descriptor;
pub mod k1;
pub mod mix;
pub mod pll;
#[cfg(test)]
pub(crate) mod testing;

pub use descriptor::{
    ClockDescriptor, ClockFlags, ClockHw, ClockId, ClockKind, DdnConfig, Domain, FieldConfig,
    MixConfig, PllConfig, PllRateEntry,
};

/// Maximum number of clocks per domain.
pub const DOMAIN_CAPACITY: usize = 128;
/// Maximum number of candidate parents of one clock.
pub const MAX_PARENTS: usize = 8;
pub const MAX_FIXED_CLOCKS: usize = 8;
/// Number of passes over the retry list after each domain registration.
pub const REGISTER_RETRIES: usize = 5;
/// Maximum number of clocks waiting for a parent at the same time.
pub const RETRY_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutKind {
    PllLock,
    FrequencyChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SetRate,
    SetParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("parent {parent} of clock {clock} was never registered")]
    UnresolvedParent {
        clock: &'static str,
        parent: &'static str,
    },
    #[error("domain {0:?} already registered")]
    DomainRegistered(Domain),
    #[error("clock table of domain {0:?} is full")]
    DomainFull(Domain),
    #[error("duplicate clock index {index} in domain {domain:?}")]
    DuplicateIndex { domain: Domain, index: u32 },
    #[error("PLL {0} requires a lock status register map")]
    MissingLockRegmap(&'static str),
    #[error("clock {0} has too many parents")]
    TooManyParents(&'static str),
    #[error("fixed rate clock table is full")]
    FixedClocksFull,
    #[error("registration retry list is full")]
    RetryListFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("clock not found")]
    NotFound,
    #[error("parent {parent} not available for clock {clock}")]
    ParentNotFound {
        clock: &'static str,
        parent: &'static str,
    },
    #[error("{kind:?} timeout for clock {clock}")]
    Timeout {
        clock: &'static str,
        kind: TimeoutKind,
    },
    #[error("operation {op:?} not supported by clock {clock}")]
    Unsupported {
        clock: &'static str,
        op: Operation,
    },
    #[error("invalid clock configuration: {0}")]
    ConfigInvalid(#[from] ConfigError),
    #[error("clock specifier with {0} cells, at most one expected")]
    InvalidArgs(usize),
}

/// Reference to a clock registered in a [ClockController].
///
/// Handles are cheap copies which are only valid for the controller which created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHandle(HandleKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleKind {
    Fixed(u8),
    Node { domain: Domain, slot: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentRef {
    Unresolved,
    Resolved(ClockHandle),
}

#[derive(Debug, Clone, Copy)]
struct FixedClock {
    name: &'static str,
    rate: Hertz,
}

struct ClockNode<'a> {
    desc: &'a ClockDescriptor,
    parents: [ParentRef; MAX_PARENTS],
}

struct DomainTable<'a> {
    regmap: &'a dyn RegisterMap,
    lock_regmap: Option<&'a dyn RegisterMap>,
    nodes: heapless::Vec<ClockNode<'a>, DOMAIN_CAPACITY>,
}

/// Detached copy of everything needed to operate on one hardware clock.
#[derive(Clone, Copy)]
struct HwNode<'a> {
    desc: &'a ClockDescriptor,
    regmap: &'a dyn RegisterMap,
    lock_regmap: Option<&'a dyn RegisterMap>,
    parents: [ParentRef; MAX_PARENTS],
}

#[derive(Clone, Copy)]
enum NodeView<'a> {
    Fixed(FixedClock),
    Hw(HwNode<'a>),
}

impl HwNode<'_> {
    #[inline]
    fn name(&self) -> &'static str {
        self.desc.name
    }

    fn active_slot(&self) -> Option<usize> {
        if self.desc.parents.is_empty() {
            return None;
        }
        match self.desc.hw {
            ClockHw::Mix(mix) => {
                Some(mix.parent_index(self.name(), self.regmap, self.desc.parents.len()))
            }
            ClockHw::Pll(_) | ClockHw::Ddn(_) => Some(0),
        }
    }

    /// Currently selected parent. [None] for clocks without parents.
    fn active_parent(&self) -> Result<Option<ClockHandle>, ClockError> {
        let Some(slot) = self.active_slot() else {
            return Ok(None);
        };
        match self.parents[slot] {
            ParentRef::Resolved(handle) => Ok(Some(handle)),
            ParentRef::Unresolved => Err(ClockError::ParentNotFound {
                clock: self.name(),
                parent: self.desc.parents[slot],
            }),
        }
    }

    fn recalc_rate(&self, parent_rate: u64) -> u64 {
        match self.desc.hw {
            ClockHw::Pll(pll) => pll.rate(self.name(), self.regmap),
            ClockHw::Mix(mix) => mix.recalc_rate(self.regmap, parent_rate),
            ClockHw::Ddn(ddn) => ddn.recalc_rate(self.name(), self.regmap, parent_rate),
        }
    }
}

/// Clock tree registry and dispatcher.
///
/// The controller owns the delay provider which is used while waiting for PLL locks and
/// frequency change acknowledgements.
pub struct ClockController<'a, D> {
    domains: [Option<DomainTable<'a>>; 4],
    fixed: heapless::Vec<FixedClock, MAX_FIXED_CLOCKS>,
    retry: heapless::Vec<ClockHandle, RETRY_CAPACITY>,
    delay: D,
}

impl<'a, D: DelayNs> ClockController<'a, D> {
    pub fn new(delay: D) -> Self {
        Self {
            domains: [None, None, None, None],
            fixed: heapless::Vec::new(),
            retry: heapless::Vec::new(),
            delay,
        }
    }

    #[inline]
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Register an external fixed-rate root clock.
    ///
    /// Registering a name a second time returns the existing clock.
    pub fn register_fixed_rate(
        &mut self,
        name: &'static str,
        rate: Hertz,
    ) -> Result<ClockHandle, ClockError> {
        if let Some(idx) = self.fixed.iter().position(|fixed| fixed.name == name) {
            return Ok(ClockHandle(HandleKind::Fixed(idx as u8)));
        }
        self.fixed
            .push(FixedClock { name, rate })
            .map_err(|_| ConfigError::FixedClocksFull)?;
        Ok(ClockHandle(HandleKind::Fixed((self.fixed.len() - 1) as u8)))
    }

    /// Register the clock table of one domain.
    ///
    /// PLL clocks require the `lock_regmap` which contains their lock status bits. PLLs which
    /// are in an unknown state are programmed to their lowest rate table entry. After the domain
    /// is registered, the retry list is processed for up to [REGISTER_RETRIES] passes.
    pub fn register_domain(
        &mut self,
        domain: Domain,
        regmap: &'a dyn RegisterMap,
        lock_regmap: Option<&'a dyn RegisterMap>,
        descriptors: &'a [ClockDescriptor],
    ) -> Result<(), ClockError> {
        if self.domains[domain as usize].is_some() {
            return Err(ConfigError::DomainRegistered(domain).into());
        }
        if descriptors.len() > DOMAIN_CAPACITY {
            return Err(ConfigError::DomainFull(domain).into());
        }
        for (idx, desc) in descriptors.iter().enumerate() {
            if desc.parents.len() > MAX_PARENTS {
                return Err(ConfigError::TooManyParents(desc.name).into());
            }
            if matches!(desc.hw, ClockHw::Pll(_)) && lock_regmap.is_none() {
                return Err(ConfigError::MissingLockRegmap(desc.name).into());
            }
            if descriptors[..idx]
                .iter()
                .any(|other| other.index == desc.index)
            {
                return Err(ConfigError::DuplicateIndex {
                    domain,
                    index: desc.index,
                }
                .into());
            }
        }

        self.domains[domain as usize] = Some(DomainTable {
            regmap,
            lock_regmap,
            nodes: heapless::Vec::new(),
        });
        // Clocks are linked one after another, so only clocks inserted earlier are visible.
        for (slot, desc) in descriptors.iter().enumerate() {
            if let Some(table) = self.domains[domain as usize].as_mut() {
                // Capacity was checked above.
                table.nodes.push(ClockNode::new(desc)).ok();
            }
            if let ClockHw::Pll(pll) = desc.hw {
                pll.init(desc.name, regmap);
            }
            let handle = ClockHandle(HandleKind::Node {
                domain,
                slot: slot as u8,
            });
            if !self.resolve_parents(handle) {
                self.retry
                    .push(handle)
                    .map_err(|_| ConfigError::RetryListFull)?;
            }
        }
        log::debug!(
            "registered {} clocks for domain {:?}",
            descriptors.len(),
            domain
        );
        self.retry_pending();
        Ok(())
    }

    /// Check that every registered clock could be linked to all of its parents.
    ///
    /// This does not run any further retries.
    pub fn finalize(&self) -> Result<(), ClockError> {
        for handle in &self.retry {
            let Some(NodeView::Hw(node)) = self.view(*handle) else {
                continue;
            };
            for (slot, parent) in node.desc.parents.iter().enumerate() {
                if node.parents[slot] == ParentRef::Unresolved {
                    return Err(ConfigError::UnresolvedParent {
                        clock: node.name(),
                        parent: *parent,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    fn resolve_parents(&mut self, handle: ClockHandle) -> bool {
        let Some(NodeView::Hw(node)) = self.view(handle) else {
            return false;
        };
        let mut parents = node.parents;
        let mut complete = true;
        for (slot, name) in node.desc.parents.iter().enumerate() {
            if parents[slot] != ParentRef::Unresolved {
                continue;
            }
            match self.find_node_by_name(name) {
                Some(parent) => parents[slot] = ParentRef::Resolved(parent),
                None => complete = false,
            }
        }
        if let HandleKind::Node { domain, slot } = handle.0 {
            if let Some(stored) = self.domains[domain as usize]
                .as_mut()
                .and_then(|table| table.nodes.get_mut(slot as usize))
            {
                stored.parents = parents;
            }
        }
        complete
    }

    fn retry_pending(&mut self) {
        let mut passes = 0;
        while !self.retry.is_empty() && passes < REGISTER_RETRIES {
            let pending = core::mem::take(&mut self.retry);
            for handle in pending {
                if !self.resolve_parents(handle) {
                    // Can not overflow, the list held this entry before.
                    self.retry.push(handle).ok();
                }
            }
            passes += 1;
        }
        if !self.retry.is_empty() {
            log::debug!(
                "{} clocks with unresolved parents after {} passes",
                self.retry.len(),
                passes
            );
        }
    }

    fn view(&self, handle: ClockHandle) -> Option<NodeView<'a>> {
        match handle.0 {
            HandleKind::Fixed(idx) => self.fixed.get(idx as usize).copied().map(NodeView::Fixed),
            HandleKind::Node { domain, slot } => {
                let table = self.domains[domain as usize].as_ref()?;
                let node = table.nodes.get(slot as usize)?;
                Some(NodeView::Hw(HwNode {
                    desc: node.desc,
                    regmap: table.regmap,
                    lock_regmap: table.lock_regmap,
                    parents: node.parents,
                }))
            }
        }
    }

    fn hw_node(&self, handle: ClockHandle) -> Result<Result<HwNode<'a>, FixedClock>, ClockError> {
        match self.view(handle).ok_or(ClockError::NotFound)? {
            NodeView::Hw(node) => Ok(Ok(node)),
            NodeView::Fixed(fixed) => Ok(Err(fixed)),
        }
    }

    /// Look up a clock by its binding index inside a domain.
    pub fn find_node(&self, domain: Domain, index: u32) -> Option<ClockHandle> {
        let table = self.domains[domain as usize].as_ref()?;
        table
            .nodes
            .iter()
            .position(|node| node.desc.index == index)
            .map(|slot| {
                ClockHandle(HandleKind::Node {
                    domain,
                    slot: slot as u8,
                })
            })
    }

    /// Look up a clock by its raw numeric ID, see [ClockId::from_raw].
    pub fn find_node_by_id(&self, raw: u32) -> Option<ClockHandle> {
        let id = ClockId::from_raw(raw)?;
        self.find_node(id.domain(), id.index())
    }

    /// Look up a clock by name. Fixed-rate clocks are searched first, then the domains in
    /// registration table order.
    pub fn find_node_by_name(&self, name: &str) -> Option<ClockHandle> {
        if let Some(idx) = self.fixed.iter().position(|fixed| fixed.name == name) {
            return Some(ClockHandle(HandleKind::Fixed(idx as u8)));
        }
        for domain in Domain::ALL {
            let Some(table) = self.domains[domain as usize].as_ref() else {
                continue;
            };
            if let Some(slot) = table.nodes.iter().position(|node| node.desc.name == name) {
                return Some(ClockHandle(HandleKind::Node {
                    domain,
                    slot: slot as u8,
                }));
            }
        }
        None
    }

    /// Translate a consumer clock specifier.
    ///
    /// No argument cells select index 0 of the domain, one cell selects the clock with that
    /// index.
    pub fn xlate(&self, domain: Domain, args: &[u32]) -> Result<ClockHandle, ClockError> {
        if args.len() > 1 {
            log::debug!("invalid clock specifier with {} cells", args.len());
            return Err(ClockError::InvalidArgs(args.len()));
        }
        self.find_node(domain, args.first().copied().unwrap_or(0))
            .ok_or(ClockError::NotFound)
    }

    /// All clocks of a domain in table order.
    pub fn clocks(&self, domain: Domain) -> impl Iterator<Item = ClockHandle> + '_ {
        let len = self.domains[domain as usize]
            .as_ref()
            .map(|table| table.nodes.len())
            .unwrap_or(0);
        (0..len).map(move |slot| {
            ClockHandle(HandleKind::Node {
                domain,
                slot: slot as u8,
            })
        })
    }

    pub fn name(&self, handle: ClockHandle) -> Option<&'static str> {
        match self.view(handle)? {
            NodeView::Fixed(fixed) => Some(fixed.name),
            NodeView::Hw(node) => Some(node.name()),
        }
    }

    /// Numeric ID of a clock. Fixed-rate clocks have no ID.
    pub fn id(&self, handle: ClockHandle) -> Option<ClockId> {
        match (handle.0, self.view(handle)?) {
            (HandleKind::Node { domain, .. }, NodeView::Hw(node)) => {
                Some(ClockId::new(domain, node.desc.index))
            }
            _ => None,
        }
    }

    pub fn kind(&self, handle: ClockHandle) -> Option<ClockKind> {
        match self.view(handle)? {
            NodeView::Fixed(_) => Some(ClockKind::FixedRate),
            NodeView::Hw(node) => Some(node.desc.kind()),
        }
    }

    pub fn flags(&self, handle: ClockHandle) -> Option<ClockFlags> {
        match self.view(handle)? {
            NodeView::Fixed(_) => Some(ClockFlags::NONE),
            NodeView::Hw(node) => Some(node.desc.flags),
        }
    }

    /// Current rate of a clock. Clocks in an unknown state or with an unavailable parent
    /// report 0 Hz.
    pub fn get_rate(&self, handle: ClockHandle) -> Hertz {
        Hertz::from_raw(self.rate_raw(handle))
    }

    fn rate_raw(&self, handle: ClockHandle) -> u64 {
        match self.view(handle) {
            Some(NodeView::Fixed(fixed)) => fixed.rate.raw(),
            Some(NodeView::Hw(node)) => {
                let parent_rate = match node.active_parent() {
                    Ok(Some(parent)) => self.rate_raw(parent),
                    _ => 0,
                };
                node.recalc_rate(parent_rate)
            }
            None => 0,
        }
    }

    /// Set the clock to the achievable rate closest to `rate` and return the new rate.
    ///
    /// PLLs select the closest rate table entry. Clocks with a divider or mux search all
    /// candidate parents and divider values for the closest rate. Fractional dividers use the
    /// best rational approximation for their field widths.
    pub fn set_rate(&mut self, handle: ClockHandle, rate: Hertz) -> Result<Hertz, ClockError> {
        let node = self.hw_node(handle)?.map_err(|fixed| ClockError::Unsupported {
            clock: fixed.name,
            op: Operation::SetRate,
        })?;
        let unsupported = ClockError::Unsupported {
            clock: node.name(),
            op: Operation::SetRate,
        };
        let target = rate.raw();
        match node.desc.hw {
            ClockHw::Pll(pll) => {
                pll.set_rate(node.regmap, target).ok_or(unsupported)?;
            }
            ClockHw::Ddn(ddn) => {
                let parent_rate = node
                    .active_parent()?
                    .map(|parent| self.rate_raw(parent))
                    .unwrap_or(0);
                ddn.set_rate(node.regmap, target, parent_rate);
            }
            ClockHw::Mix(mix) => {
                if mix.mux.is_none() && mix.div.is_none() {
                    return Err(unsupported);
                }
                let mut candidates: heapless::Vec<(usize, u64), MAX_PARENTS> = heapless::Vec::new();
                if mix.mux.is_some() {
                    for (slot, parent) in node.parents[..node.desc.parents.len()]
                        .iter()
                        .enumerate()
                    {
                        if let ParentRef::Resolved(parent) = parent {
                            candidates.push((slot, self.rate_raw(*parent))).ok();
                        }
                    }
                } else if let Some(parent) = node.active_parent()? {
                    candidates.push((0, self.rate_raw(parent))).ok();
                }
                let selection =
                    mix.best_fit(target, &candidates)
                        .ok_or(ClockError::ParentNotFound {
                            clock: node.name(),
                            parent: node.desc.parents.first().copied().unwrap_or_default(),
                        })?;
                mix.apply(node.regmap, &selection);
                mix.trigger_fc(node.name(), node.regmap, &mut self.delay)?;
            }
        }
        let actual = self.get_rate(handle);
        log::trace!(
            "{}: requested {} Hz, running at {} Hz",
            node.name(),
            target,
            actual.raw()
        );
        Ok(actual)
    }

    /// Enable a clock and all of its ancestors, starting with the root.
    ///
    /// The first failing ancestor aborts the operation. Register writes done before the
    /// failure are not rolled back.
    pub fn enable(&mut self, handle: ClockHandle) -> Result<(), ClockError> {
        let node = match self.hw_node(handle)? {
            Ok(node) => node,
            Err(_fixed) => return Ok(()),
        };
        if let Some(parent) = node.active_parent()? {
            if !matches!(parent.0, HandleKind::Fixed(_)) {
                self.enable(parent)?;
            }
        }
        match node.desc.hw {
            ClockHw::Pll(pll) => {
                let lock_regmap = node
                    .lock_regmap
                    .ok_or(ConfigError::MissingLockRegmap(node.name()))?;
                pll.enable(node.name(), node.regmap, lock_regmap, &mut self.delay)?;
            }
            ClockHw::Mix(mix) => mix.gate_enable(node.regmap),
            ClockHw::Ddn(_) => (),
        }
        Ok(())
    }

    /// Gate a clock. Its parents are left running.
    pub fn disable(&mut self, handle: ClockHandle) -> Result<(), ClockError> {
        if let Ok(node) = self.hw_node(handle)? {
            match node.desc.hw {
                ClockHw::Pll(pll) => pll.disable(node.regmap),
                ClockHw::Mix(mix) => mix.gate_disable(node.regmap),
                ClockHw::Ddn(_) => (),
            }
        }
        Ok(())
    }

    /// Whether the clock runs. Clocks without a gate of their own follow their parent.
    pub fn is_enabled(&self, handle: ClockHandle) -> bool {
        let node = match self.view(handle) {
            Some(NodeView::Hw(node)) => node,
            Some(NodeView::Fixed(_)) => return true,
            None => return false,
        };
        let own = match node.desc.hw {
            ClockHw::Pll(pll) => Some(pll.is_enabled(node.regmap)),
            ClockHw::Mix(mix) => mix.gate_is_enabled(node.regmap),
            ClockHw::Ddn(_) => None,
        };
        if let Some(enabled) = own {
            return enabled;
        }
        match node.active_parent() {
            Ok(Some(parent)) => self.is_enabled(parent),
            Ok(None) => true,
            Err(_) => false,
        }
    }

    /// Select a new parent for a clock with a mux.
    pub fn set_parent(&mut self, handle: ClockHandle, parent: ClockHandle) -> Result<(), ClockError> {
        let node = self.hw_node(handle)?.map_err(|fixed| ClockError::Unsupported {
            clock: fixed.name,
            op: Operation::SetParent,
        })?;
        let mix = match node.desc.hw {
            ClockHw::Mix(mix) if mix.mux.is_some() => mix,
            _ => {
                return Err(ClockError::Unsupported {
                    clock: node.name(),
                    op: Operation::SetParent,
                });
            }
        };
        let parent_name = self.name(parent).ok_or(ClockError::NotFound)?;
        let index = node
            .desc
            .parents
            .iter()
            .position(|name| *name == parent_name)
            .ok_or(ClockError::ParentNotFound {
                clock: node.name(),
                parent: parent_name,
            })?;
        mix.select_parent(node.regmap, index);
        mix.trigger_fc(node.name(), node.regmap, &mut self.delay)
    }

    /// Currently active parent, [None] for root clocks or unavailable parents.
    pub fn get_parent(&self, handle: ClockHandle) -> Option<ClockHandle> {
        match self.view(handle)? {
            NodeView::Fixed(_) => None,
            NodeView::Hw(node) => node.active_parent().ok().flatten(),
        }
    }

    /// Enable all clocks flagged as [ClockFlags::CRITICAL].
    pub fn enable_critical(&mut self) -> Result<(), ClockError> {
        for domain in Domain::ALL {
            let len = self.clocks(domain).count();
            for slot in 0..len {
                let handle = ClockHandle(HandleKind::Node {
                    domain,
                    slot: slot as u8,
                });
                if self.flags(handle).is_some_and(|flags| flags.critical()) {
                    self.enable(handle)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> ClockNode<'a> {
    const fn new(desc: &'a ClockDescriptor) -> Self {
        Self {
            desc,
            parents: [ParentRef::Unresolved; MAX_PARENTS],
        }
    }
}
