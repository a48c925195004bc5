/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month, shared by both calendars (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Farvardin
pub const JANUARY: u8 = 1;
/// Month number for December / Esfand
pub const DECEMBER: u8 = 12;

/// Length of the Jalali arithmetic leap cycle in years
pub const JALALI_CYCLE_YEARS: i32 = 33;

/// Positions within the 33-year cycle (`year mod 33`) that are leap years
pub const JALALI_LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Leap years in one full 33-year cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;

/// Days in one full 33-year cycle (33 * 365 + 8 leap days)
pub(crate) const JALALI_CYCLE_DAYS: i32 = 12_053;

/// Months 1..=6 have 31 days
pub const JALALI_FIRST_HALF_DAYS: u8 = 31;
/// Months 7..=11 have 30 days, as does Esfand in a leap year
pub const JALALI_SECOND_HALF_DAYS: u8 = 30;
/// Esfand outside leap years
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Last month of the 31-day half (Shahrivar)
pub(crate) const JALALI_FIRST_HALF_MONTHS: u8 = 6;
/// Days in the first six months (6 * 31)
pub(crate) const JALALI_FIRST_HALF_ORDINALS: i32 = 186;

/// Days from 1 Farvardin 1 AP (622-03-21) to 1970-01-01
pub(crate) const JALALI_EPOCH_OFFSET: i32 = 492_268;

/// `num_days_from_ce` of 1970-01-01 (0001-01-01 is day 1)
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Jalali year containing 0001-01-01 (-621/10/11)
pub const MIN_JALALI_YEAR: i32 = -621;
/// Jalali year containing 9999-12-31 (9378/10/10)
pub const MAX_JALALI_YEAR: i32 = 9378;

/// Day number (days since 1970-01-01) of 0001-01-01
pub const MIN_DAY_NUMBER: i32 = -719_162;
/// Day number (days since 1970-01-01) of 9999-12-31
pub const MAX_DAY_NUMBER: i32 = 2_932_896;

/// 1970-01-01 was a Thursday, slot 5 in a Saturday-first week
pub(crate) const EPOCH_WEEKDAY_SLOT: i32 = 5;
/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Years listed in the year picker before the cursor year
pub const YEAR_WINDOW_BEFORE: i32 = 100;
/// Total years listed in the year picker
pub const YEAR_WINDOW_LEN: i32 = 110;

/// Persian month names, Farvardin first
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// One-letter Persian weekday labels, Saturday first
pub const PERSIAN_WEEKDAYS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Input placeholder shown when nothing is selected
pub const DEFAULT_PLACEHOLDER: &str = "تاریخ انتخاب کنید";
/// Shown after a committed range start while the end is still missing
pub const PICK_END_PROMPT: &str = "انتخاب کنید";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Jalali date component separator
pub const JALALI_SEPARATOR: char = '/';
/// Separator between the two endpoints of a displayed range
pub const RANGE_SEPARATOR: &str = " - ";
