//! Theme module for the case-study presentation
//!
//! This module provides a centralized color palette and styling constants
//! built on the slate/indigo palette of the GigFlow brand.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded border set used by every card
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors - Slate
// ============================================================================

/// Primary background color - slate 900 (#0f172a)
pub const BG_PRIMARY: Color = Color::Rgb(15, 23, 42);

/// Card background color - slate 800 (#1e293b)
pub const BG_SECONDARY: Color = Color::Rgb(30, 41, 59);

/// Highlighted area background - slate 700 (#334155)
pub const BG_TERTIARY: Color = Color::Rgb(51, 65, 85);

/// Subtle border color - slate 600 (#475569)
pub const BORDER_SUBTLE: Color = Color::Rgb(71, 85, 105);

// ============================================================================
// Accent Colors - Indigo Primary
// ============================================================================

/// Primary indigo accent (#818cf8)
pub const INDIGO_PRIMARY: Color = Color::Rgb(129, 140, 248);

/// Brand indigo used for the automated series (#4f46e5)
pub const INDIGO_DEEP: Color = Color::Rgb(79, 70, 229);

/// Blue used by the countdown panel (#60a5fa)
pub const BLUE_INFO: Color = Color::Rgb(96, 165, 250);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - slate 200 (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - slate 400 (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - slate 500 (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Chart Colors
// ============================================================================

/// Manual process bar (#94a3b8)
pub const CHART_MANUAL: Color = TEXT_SECONDARY;

/// Automated workflow bar (#4f46e5)
pub const CHART_AUTOMATED: Color = INDIGO_DEEP;
