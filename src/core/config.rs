//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

pub const DEFAULT_CLOCK: &str = "clk";
pub const DEFAULT_PERIOD: u64 = 10;
pub const DEFAULT_TIMESCALE: &str = "1ns";
pub const DEFAULT_SIM_TIME: u64 = 1000;

/// User-supplied timing settings for the generated testbench.
///
/// Any setting left unset falls back to its default when queried.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TbConfig {
    clock_name: Option<String>,
    clock_period: Option<u64>,
    timescale: Option<String>,
    sim_time: Option<u64>,
}

impl TbConfig {
    pub fn new() -> Self {
        Self {
            clock_name: None,
            clock_period: None,
            timescale: None,
            sim_time: None,
        }
    }

    pub fn clock_name(mut self, name: Option<String>) -> Self {
        self.clock_name = name;
        self
    }

    pub fn clock_period(mut self, period: Option<u64>) -> Self {
        self.clock_period = period;
        self
    }

    pub fn timescale(mut self, unit: Option<String>) -> Self {
        self.timescale = unit;
        self
    }

    pub fn sim_time(mut self, time: Option<u64>) -> Self {
        self.sim_time = time;
        self
    }

    pub fn get_clock_name(&self) -> &str {
        self.clock_name.as_deref().unwrap_or(DEFAULT_CLOCK)
    }

    /// Full clock period, in timescale units.
    pub fn get_clock_period(&self) -> u64 {
        self.clock_period.unwrap_or(DEFAULT_PERIOD)
    }

    /// Delay between two clock edges.
    pub fn get_half_period(&self) -> u64 {
        self.get_clock_period() / 2
    }

    pub fn get_timescale(&self) -> &str {
        self.timescale.as_deref().unwrap_or(DEFAULT_TIMESCALE)
    }

    pub fn get_sim_time(&self) -> u64 {
        self.sim_time.unwrap_or(DEFAULT_SIM_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = TbConfig::new();
        assert_eq!(cfg.get_clock_name(), "clk");
        assert_eq!(cfg.get_clock_period(), 10);
        assert_eq!(cfg.get_half_period(), 5);
        assert_eq!(cfg.get_timescale(), "1ns");
        assert_eq!(cfg.get_sim_time(), 1000);
        assert_eq!(cfg, TbConfig::default());
    }

    #[test]
    fn overrides() {
        let cfg = TbConfig::new()
            .clock_name(Some(String::from("aclk")))
            .clock_period(Some(25))
            .timescale(Some(String::from("1ps")))
            .sim_time(None);
        assert_eq!(cfg.get_clock_name(), "aclk");
        // half period truncates
        assert_eq!(cfg.get_half_period(), 12);
        assert_eq!(cfg.get_timescale(), "1ps");
        assert_eq!(cfg.get_sim_time(), 1000);
    }
}
