//! 트레이딩 봇 관련 값 집합

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 봇 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Stopped,
    Running,
    Error,
}

impl BotStatus {
    pub const ALLOWED: &'static [&'static str] = &["stopped", "running", "error"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BotStatus::Stopped => "stopped",
            BotStatus::Running => "running",
            BotStatus::Error => "error",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, BotStatus::Running)
    }
}

impl FromStr for BotStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stopped" => Ok(BotStatus::Stopped),
            "running" => Ok(BotStatus::Running),
            "error" => Ok(BotStatus::Error),
            other => Err(AppError::InvalidEnumValue {
                field: "status",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 봇 제어 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotAction {
    Start,
    Stop,
}

impl BotAction {
    pub const ALLOWED: &'static [&'static str] = &["start", "stop"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BotAction::Start => "start",
            BotAction::Stop => "stop",
        }
    }

    /// 명령 실행 후 기대되는 봇 상태
    pub fn target_status(&self) -> BotStatus {
        match self {
            BotAction::Start => BotStatus::Running,
            BotAction::Stop => BotStatus::Stopped,
        }
    }
}

impl FromStr for BotAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "start" => Ok(BotAction::Start),
            "stop" => Ok(BotAction::Stop),
            other => Err(AppError::InvalidEnumValue {
                field: "action",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for BotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 캔들 타임프레임
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    /// 기본값
    #[default]
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
}

impl Timeframe {
    pub const ALLOWED: &'static [&'static str] = &["1m", "5m", "15m", "1h", "4h"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMinute => "1m",
            Timeframe::FiveMinutes => "5m",
            Timeframe::FifteenMinutes => "15m",
            Timeframe::OneHour => "1h",
            Timeframe::FourHours => "4h",
        }
    }

    /// 캔들 하나의 길이 (분)
    pub fn minutes(&self) -> u32 {
        match self {
            Timeframe::OneMinute => 1,
            Timeframe::FiveMinutes => 5,
            Timeframe::FifteenMinutes => 15,
            Timeframe::OneHour => 60,
            Timeframe::FourHours => 240,
        }
    }
}

impl FromStr for Timeframe {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "1m" => Ok(Timeframe::OneMinute),
            "5m" => Ok(Timeframe::FiveMinutes),
            "15m" => Ok(Timeframe::FifteenMinutes),
            "1h" => Ok(Timeframe::OneHour),
            "4h" => Ok(Timeframe::FourHours),
            other => Err(AppError::InvalidEnumValue {
                field: "timeframe",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_action_from_str() {
        assert_eq!("start".parse::<BotAction>().unwrap(), BotAction::Start);
        assert_eq!("stop".parse::<BotAction>().unwrap(), BotAction::Stop);
        assert!("buy".parse::<BotAction>().is_err());
        assert!("START".parse::<BotAction>().is_err());
    }

    #[test]
    fn test_bot_action_target_status() {
        assert!(BotAction::Start.target_status().is_running());
        assert_eq!(BotAction::Stop.target_status(), BotStatus::Stopped);
    }

    #[test]
    fn test_timeframe_roundtrip_names() {
        for &name in Timeframe::ALLOWED {
            let timeframe: Timeframe = name.parse().unwrap();
            assert_eq!(timeframe.as_str(), name);
            assert_eq!(serde_json::to_value(timeframe).unwrap(), name);
        }
    }

    #[test]
    fn test_timeframe_minutes() {
        assert_eq!(Timeframe::default(), Timeframe::FifteenMinutes);
        assert_eq!(Timeframe::OneHour.minutes(), 60);
        assert_eq!(Timeframe::FourHours.minutes(), 240);
    }

    #[test]
    fn test_unknown_timeframe_names_allowed_set() {
        let err = "30m".parse::<Timeframe>().unwrap_err();
        match err {
            AppError::InvalidEnumValue { field, value, allowed } => {
                assert_eq!(field, "timeframe");
                assert_eq!(value, "30m");
                assert_eq!(allowed, Timeframe::ALLOWED);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
