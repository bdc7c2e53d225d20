mod health_check;
mod helpers;
mod planting_info;
