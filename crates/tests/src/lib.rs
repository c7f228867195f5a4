#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod session_persistence_tests;

#[cfg(test)]
mod route_guard_tests;

#[cfg(test)]
mod nav_filter_tests;
